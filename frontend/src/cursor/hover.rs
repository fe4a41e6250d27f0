use super::trail::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractiveRole {
    Link,
    Button,
    Input,
    TextArea,
    /// Any element carrying `role="button"`.
    ButtonRole,
}

impl InteractiveRole {
    pub const ALL: [InteractiveRole; 5] = [
        InteractiveRole::Link,
        InteractiveRole::Button,
        InteractiveRole::Input,
        InteractiveRole::TextArea,
        InteractiveRole::ButtonRole,
    ];

    /// Role of an element given its tag name and `role` attribute.
    pub fn classify(tag_name: &str, role: Option<&str>) -> Option<Self> {
        if role.map_or(false, |role| role.trim().eq_ignore_ascii_case("button")) {
            return Some(InteractiveRole::ButtonRole);
        }
        match tag_name.to_ascii_lowercase().as_str() {
            "a" => Some(InteractiveRole::Link),
            "button" => Some(InteractiveRole::Button),
            "input" => Some(InteractiveRole::Input),
            "textarea" => Some(InteractiveRole::TextArea),
            _ => None,
        }
    }
}

/// Which element roles make the cursor snap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoverPolicy {
    roles: Vec<InteractiveRole>,
}

impl Default for HoverPolicy {
    fn default() -> Self {
        Self::new(InteractiveRole::ALL)
    }
}

impl HoverPolicy {
    pub fn new(roles: impl IntoIterator<Item = InteractiveRole>) -> Self {
        Self {
            roles: roles.into_iter().collect(),
        }
    }

    pub fn accepts(&self, tag_name: &str, role: Option<&str>) -> bool {
        InteractiveRole::classify(tag_name, role).map_or(false, |r| self.roles.contains(&r))
    }

    /// Index of the first accepted element in `chain`, which lists the event
    /// target first and then its ancestors as `(tag name, role attribute)`.
    pub fn first_match<'a, I>(&self, chain: I) -> Option<usize>
    where
        I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
    {
        chain
            .into_iter()
            .position(|(tag_name, role)| self.accepts(tag_name, role))
    }
}

/// Bounding box of a hovered element in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_tags_case_insensitively() {
        assert_eq!(InteractiveRole::classify("A", None), Some(InteractiveRole::Link));
        assert_eq!(InteractiveRole::classify("BUTTON", None), Some(InteractiveRole::Button));
        assert_eq!(InteractiveRole::classify("textarea", None), Some(InteractiveRole::TextArea));
        assert_eq!(InteractiveRole::classify("DIV", None), None);
        assert_eq!(
            InteractiveRole::classify("DIV", Some("button")),
            Some(InteractiveRole::ButtonRole)
        );
        assert_eq!(InteractiveRole::classify("DIV", Some("navigation")), None);
    }

    #[test]
    fn nested_span_inside_link_matches_the_link() {
        let policy = HoverPolicy::default();
        let chain: [(&str, Option<&str>); 3] = [("SPAN", None), ("A", None), ("NAV", None)];
        assert_eq!(policy.first_match(chain), Some(1));
    }

    #[test]
    fn no_interactive_ancestor_means_no_match() {
        let policy = HoverPolicy::default();
        let chain = [("SPAN", None), ("DIV", Some("presentation")), ("BODY", None)];
        assert_eq!(policy.first_match(chain), None);
    }

    #[test]
    fn policy_only_accepts_configured_roles() {
        let policy = HoverPolicy::new([InteractiveRole::Button]);
        assert!(policy.accepts("button", None));
        assert!(!policy.accepts("a", None));
        assert!(!policy.accepts("div", Some("button")));
    }

    #[test]
    fn rect_center() {
        let rect = Rect {
            left: 10.0,
            top: 20.0,
            width: 100.0,
            height: 40.0,
        };
        assert_eq!(rect.center(), Point::new(60.0, 40.0));
    }
}
