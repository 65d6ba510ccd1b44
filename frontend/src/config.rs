//! Build-time settings and page copy.
//!
//! `LANDING_VARIANT` (`showcase` or `classic`) and `LANDING_CONTACT_URL` are
//! read from the environment at compile time.

use std::str::FromStr;

use crate::error::ParseVariantError;

const DEFAULT_CONTACT_URL: &str = "https://trylintel.com";
pub const SLIDES_URL: &str = "https://slides.trylintel.com";

/// In-page sections reachable from the navigation: (fragment id, label).
pub const NAV_SECTIONS: [(&str, &str); 3] = [
    ("problem", "Problem"),
    ("features", "Features"),
    ("team", "Team"),
];

/// The classic header lists features first.
pub const CLASSIC_NAV_SECTIONS: [(&str, &str); 3] = [
    ("features", "Features"),
    ("problem", "Problem"),
    ("team", "Team"),
];

pub fn get_contact_url() -> &'static str {
    option_env!("LANDING_CONTACT_URL").unwrap_or(DEFAULT_CONTACT_URL)
}

/// How the header reacts to scrolling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderMode {
    /// Floating header morphing with damped scroll progress.
    Continuous,
    /// Fixed bar that switches look past a scroll offset.
    Threshold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageVariant {
    #[default]
    Showcase,
    Classic,
}

impl FromStr for PageVariant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "showcase" => Ok(PageVariant::Showcase),
            "classic" => Ok(PageVariant::Classic),
            _ => Err(ParseVariantError(s.to_string())),
        }
    }
}

impl PageVariant {
    /// Variant picked at build time. Unknown names fall back to the default.
    pub fn active() -> Self {
        Self::resolve(option_env!("LANDING_VARIANT"))
    }

    fn resolve(raw: Option<&str>) -> Self {
        match raw.map(str::parse) {
            None => PageVariant::default(),
            Some(Ok(variant)) => variant,
            Some(Err(err)) => {
                log::warn!("{}, using default", err);
                PageVariant::default()
            }
        }
    }

    pub fn content(self) -> &'static PageContent {
        match self {
            PageVariant::Showcase => &SHOWCASE,
            PageVariant::Classic => &CLASSIC,
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct ProblemCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct FeatureCard {
    pub title: &'static str,
    pub video: &'static str,
    pub caption: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub photo: &'static str,
    pub photo_class: &'static str,
    pub photo_position: &'static str,
    pub linkedin: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct PageContent {
    pub brand: &'static str,
    pub header_mode: HeaderMode,
    pub logo: &'static str,
    pub logo_on_dark: &'static str,
    pub logo_on_light: &'static str,
    pub hero_badge: &'static str,
    pub hero_title: &'static str,
    pub hero_body: &'static str,
    pub hero_image: &'static str,
    pub hero_video_embed: &'static str,
    pub problem_title: &'static str,
    pub problem_body: &'static str,
    pub counter_prefix: &'static str,
    /// Shown once the count has landed, if set.
    pub counter_suffix: Option<&'static str>,
    pub counter_label: &'static str,
    pub stats: &'static [Stat],
    pub problems: &'static [ProblemCard],
    pub features_title: &'static str,
    pub features_body: &'static str,
    pub features: &'static [FeatureCard],
    pub team_title: &'static str,
    pub team_body: &'static str,
    pub team: &'static [TeamMember],
    pub tagline: &'static str,
    pub pilot_note: &'static str,
}

const STATS: &[Stat] = &[
    Stat {
        value: "6,400 hrs",
        label: "spent reviewing documents",
    },
    Stat {
        value: "$864K",
        label: "RFI processing cost",
    },
];

const PROBLEMS: &[ProblemCard] = &[
    ProblemCard {
        icon: "fa-regular fa-clock",
        title: "Scope Gaps and Ambiguities",
        body: "Project scopes are often missing critical details and leave specifics to interpretation, causing contractor conflict and rework.",
    },
    ProblemCard {
        icon: "fa-solid fa-file-circle-xmark",
        title: "Plan Conflicts",
        body: "Drawings don't match specs, and conflicts make their way to the site, causing rework and delays.",
    },
    ProblemCard {
        icon: "fa-solid fa-triangle-exclamation",
        title: "Regulatory Non-Compliance",
        body: "Regulatory issues are caught during inspections that existed since design, causing delays and potential fines.",
    },
];

const FEATURES: &[FeatureCard] = &[
    FeatureCard {
        title: "Automated Issue Detection",
        video: "/demo-video-1.mp4",
        caption: "AI-powered scanning identifies contradictions across drawings, specs, and schedules in real-time",
    },
    FeatureCard {
        title: "Streamlined RFI Process",
        video: "/demo-video-2.mp4",
        caption: "Generate and send RFIs directly from detected issues with all context and evidence attached to Procore in one click",
    },
    FeatureCard {
        title: "Evidence-Based Insights",
        video: "/demo-video-3.mp4",
        caption: "Every issue comes with precise source-page references, making verification instant and auditable",
    },
    FeatureCard {
        title: "AI-Driven Document Actions",
        video: "/demo-video-4.mp4",
        caption: "Ask Lintel AI questions across your entire construction document set and get instant, accurate answers with citations",
    },
];

const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Ibrahim Mohsin",
        role: "CEO · UNC Chapel Hill",
        bio: "Built SMS-based RAG AI connecting thousands of government resources for elderly caregivers in Western North Carolina. Founded Workly, a gig marketplace reaching 400+ users and $4K+ job volume in three months.",
        photo: "/ibrahim-mohsin-headshot.JPG",
        photo_class: "object-cover scale-125",
        photo_position: "center 5%",
        linkedin: "https://www.linkedin.com/in/ibrahim-mohsin-16a1b8261/",
    },
    TeamMember {
        name: "Jathan Pai",
        role: "CTO · Claremont McKenna College",
        bio: "400+ hours reviewing civil engineering documents during internship work. Conducted research at Caltech and Vanderbilt Medical School, and led housing policy research at the Rose Institute.",
        photo: "/jathan-pai2.jpeg",
        photo_class: "object-cover",
        photo_position: "center 0%",
        linkedin: "https://www.linkedin.com/in/jathan-pai/",
    },
];

pub static SHOWCASE: PageContent = SHOWCASE_FIELDS;

pub static CLASSIC: PageContent = PageContent {
    header_mode: HeaderMode::Threshold,
    counter_prefix: "",
    counter_suffix: Some("+"),
    ..SHOWCASE_FIELDS
};

// Struct update needs a const, not a static, as its base.
const SHOWCASE_FIELDS: PageContent = PageContent {
    brand: "Lintel",
    header_mode: HeaderMode::Continuous,
    logo: "/Lintel_Logo.png",
    logo_on_dark: "/lintel-logo3.png",
    logo_on_light: "/lintel-logo-dark.png",
    hero_badge: "AI-powered risk detection for construction documents",
    hero_title: "Catch risks before they land on-site.",
    hero_body: "Lintel's AI continuously scans your entire project document set, detecting contradictions and compliance risks with citations for instant verification.",
    hero_image: "/blueprint-clashes.png",
    hero_video_embed: "https://www.youtube.com/embed/4BzjUq921Y4?autoplay=1&mute=1&loop=1&playlist=4BzjUq921Y4&controls=0&rel=0&modestbranding=1&playsinline=1&fs=0&showinfo=0&iv_load_policy=3&disablekb=1&enablejsapi=1&vq=hd1080",
    problem_title: "Construction loses $100B+ annually to poor documentation",
    problem_body: "We spoke with 50+ construction and engineering professionals about top causes of cost overruns. The same pain points emerged.",
    counter_prefix: "~",
    counter_suffix: None,
    counter_label: "RFIs per project",
    stats: STATS,
    problems: PROBLEMS,
    features_title: "Built for how construction teams actually work",
    features_body: "From contradiction detection to RFI-ready packets, Lintel turns document risk into action.",
    features: FEATURES,
    team_title: "The right team for this problem",
    team_body: "5+ years building together across robotics, debate, and research.",
    team: TEAM,
    tagline: "AI-powered risk detection for construction documents.",
    pilot_note: "Seeking design partners for Q2 2026 pilot deployments.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_variant_names() {
        assert_eq!("showcase".parse::<PageVariant>(), Ok(PageVariant::Showcase));
        assert_eq!(" Classic ".parse::<PageVariant>(), Ok(PageVariant::Classic));
        assert_eq!(
            "retro".parse::<PageVariant>(),
            Err(ParseVariantError("retro".to_string()))
        );
    }

    #[test]
    fn unknown_or_missing_variant_falls_back() {
        assert_eq!(PageVariant::resolve(None), PageVariant::Showcase);
        assert_eq!(PageVariant::resolve(Some("nope")), PageVariant::Showcase);
        assert_eq!(PageVariant::resolve(Some("classic")), PageVariant::Classic);
    }

    #[test]
    fn variants_share_copy_but_not_behaviour() {
        let showcase = PageVariant::Showcase.content();
        let classic = PageVariant::Classic.content();
        assert_eq!(showcase.header_mode, HeaderMode::Continuous);
        assert_eq!(classic.header_mode, HeaderMode::Threshold);
        assert_eq!(classic.counter_suffix, Some("+"));
        assert_eq!(showcase.hero_title, classic.hero_title);
        assert_eq!(showcase.features.len(), 4);
        assert_eq!(showcase.team.len(), 2);
    }

    #[test]
    fn every_asset_is_shipped_from_public() {
        let manifest = include_str!("../public/README.md");
        let index = include_str!("../index.html");
        assert!(index.contains(r#"<link data-trunk rel="copy-dir" href="public" />"#));

        for content in [&SHOWCASE, &CLASSIC] {
            let mut assets = vec![
                content.logo,
                content.logo_on_dark,
                content.logo_on_light,
                content.hero_image,
            ];
            assets.extend(content.features.iter().map(|feature| feature.video));
            assets.extend(content.team.iter().map(|member| member.photo));
            for asset in assets {
                assert!(asset.starts_with('/'), "{asset} is not root-relative");
                assert!(
                    manifest.contains(&format!("`{asset}`")),
                    "{asset} missing from public/README.md"
                );
            }
        }
    }

    #[test]
    fn both_navs_cover_the_same_anchors() {
        let ids = |nav: &[(&'static str, &'static str)]| nav.iter().map(|(id, _)| *id).collect::<Vec<_>>();
        assert_eq!(ids(&NAV_SECTIONS), ["problem", "features", "team"]);
        assert_eq!(ids(&CLASSIC_NAV_SECTIONS), ["features", "problem", "team"]);
    }
}
