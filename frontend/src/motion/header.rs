//! Header geometry derived from scroll progress.
//!
//! Every value is a straight interpolation between the "top of page" look at
//! progress 0 and the floating pill at progress 1, formatted as the CSS
//! string the header writes into its inline styles.

/// Above this progress the header is considered scrolled.
pub const SCROLLED_GATE: f64 = 0.7;
/// Scroll offset at which the classic header switches to its solid look.
pub const CLASSIC_THRESHOLD_PX: f64 = 50.0;

pub const CTA_LABEL_TOP: &str = "Get in Touch";
pub const CTA_LABEL_SCROLLED: &str = "Contact";

/// Strictly greater than [`SCROLLED_GATE`]; the gate itself is still "top".
pub fn is_scrolled(progress: f64) -> bool {
    progress > SCROLLED_GATE
}

/// Discrete label swap. Never interpolated.
pub fn cta_label(progress: f64) -> &'static str {
    if is_scrolled(progress) {
        CTA_LABEL_SCROLLED
    } else {
        CTA_LABEL_TOP
    }
}

/// Boolean variant used by the classic header.
pub fn passes_threshold(scroll_y: f64) -> bool {
    scroll_y > CLASSIC_THRESHOLD_PX
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderGeometry {
    pub top: String,
    pub outer_max_width: String,
    pub radius: String,
    pub padding: String,
    pub inner_max_width: String,
    pub logo_size: String,
    pub nav_gap: String,
}

impl HeaderGeometry {
    pub fn at(progress: f64) -> Self {
        let p = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };

        Self {
            top: format!("{:.2}px", 16.0 * p),
            outer_max_width: format!(
                "calc({:.3}vw + {:.3}rem)",
                100.0 - p * 100.0,
                56.0 * p
            ),
            radius: format!("{}px", (999.0 * p).round() as i64),
            padding: format!("{:.2}px {:.2}px", 12.0 - 4.0 * p, 24.0 - 8.0 * p),
            inner_max_width: format!("calc({:.3}% + {:.3}rem)", p * 100.0, (1.0 - p) * 72.0),
            logo_size: format!("{:.2}px", 60.0 - 15.0 * p),
            nav_gap: format!("{:.2}px", 32.0 - 16.0 * p),
        }
    }

    pub fn header_style(&self) -> String {
        format!("top: {};", self.top)
    }

    pub fn outer_style(&self) -> String {
        format!("max-width: {};", self.outer_max_width)
    }

    pub fn shell_style(&self) -> String {
        format!("border-radius: {};", self.radius)
    }

    pub fn bar_style(&self) -> String {
        format!("padding: {};", self.padding)
    }

    pub fn inner_style(&self) -> String {
        format!("max-width: {};", self.inner_max_width)
    }

    pub fn logo_style(&self) -> String {
        format!("width: {0}; height: {0};", self.logo_size)
    }

    pub fn nav_style(&self) -> String {
        format!("gap: {};", self.nav_gap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_at_top_of_page() {
        let g = HeaderGeometry::at(0.0);
        assert_eq!(g.top, "0.00px");
        assert_eq!(g.outer_max_width, "calc(100.000vw + 0.000rem)");
        assert_eq!(g.radius, "0px");
        assert_eq!(g.padding, "12.00px 24.00px");
        assert_eq!(g.inner_max_width, "calc(0.000% + 72.000rem)");
        assert_eq!(g.logo_size, "60.00px");
        assert_eq!(g.nav_gap, "32.00px");
    }

    #[test]
    fn geometry_fully_scrolled() {
        let g = HeaderGeometry::at(1.0);
        assert_eq!(g.top, "16.00px");
        assert_eq!(g.outer_max_width, "calc(0.000vw + 56.000rem)");
        assert_eq!(g.radius, "999px");
        assert_eq!(g.padding, "8.00px 16.00px");
        assert_eq!(g.inner_max_width, "calc(100.000% + 0.000rem)");
        assert_eq!(g.logo_size, "45.00px");
        assert_eq!(g.nav_gap, "16.00px");
    }

    #[test]
    fn geometry_halfway() {
        let g = HeaderGeometry::at(0.5);
        assert_eq!(g.top, "8.00px");
        assert_eq!(g.outer_max_width, "calc(50.000vw + 28.000rem)");
        assert_eq!(g.radius, "500px");
        assert_eq!(g.padding, "10.00px 20.00px");
        assert_eq!(g.inner_max_width, "calc(50.000% + 36.000rem)");
        assert_eq!(g.logo_size, "52.50px");
        assert_eq!(g.nav_gap, "24.00px");
    }

    #[test]
    fn geometry_clamps_bad_progress() {
        assert_eq!(HeaderGeometry::at(-3.0), HeaderGeometry::at(0.0));
        assert_eq!(HeaderGeometry::at(7.0), HeaderGeometry::at(1.0));
        assert_eq!(HeaderGeometry::at(f64::NAN), HeaderGeometry::at(0.0));
    }

    #[test]
    fn scrolled_gate_is_exclusive() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(0.7));
        assert!(is_scrolled(0.7001));
        assert!(is_scrolled(1.0));
        assert_eq!(cta_label(0.7), CTA_LABEL_TOP);
        assert_eq!(cta_label(0.71), CTA_LABEL_SCROLLED);
    }

    #[test]
    fn classic_threshold() {
        assert!(!passes_threshold(0.0));
        assert!(!passes_threshold(50.0));
        assert!(passes_threshold(50.5));
        assert!(!passes_threshold(f64::NAN));
    }

    #[test]
    fn style_strings() {
        let g = HeaderGeometry::at(1.0);
        assert_eq!(g.header_style(), "top: 16.00px;");
        assert_eq!(g.logo_style(), "width: 45.00px; height: 45.00px;");
        assert_eq!(g.bar_style(), "padding: 8.00px 16.00px;");
    }
}
