use serde::{Deserialize, Serialize};

use super::appointment::FormField;
use super::event::ElementRole;

/// The markup contract the behaviors bind to. Every element is addressed by a key
/// (its id, or a synthetic key for elements the markup leaves unnamed).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageLayout {
    pub hamburger: String,
    pub nav_menu: String,
    pub navbar: String,
    pub nav_links: Vec<NavLink>,
    pub anchors: Vec<Anchor>,
    pub sections: Vec<Section>,
    pub stat_sections: Vec<StatSection>,
    pub form: Option<FormLayout>,
    pub faq_items: Vec<String>,
    pub lang_toggle: Option<String>,
    pub lang_notification: String,
    pub lazy_images: Vec<LazyImage>,
    pub scroll_top_button: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub key: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub key: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub offset_top: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatSection {
    pub key: String,
    pub counters: Vec<StatCounter>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatCounter {
    pub key: String,
    /// Parsed `data-target`; `None` when the attribute is missing or not a number.
    pub target: Option<u64>,
    #[serde(default = "zero_text")]
    pub text: String,
}

fn zero_text() -> String {
    "0".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormLayout {
    pub key: String,
    pub message: String,
    pub fields: Vec<FieldLayout>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldLayout {
    pub key: String,
    pub name: FormField,
    pub input_type: InputType,
    pub container: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputType {
    Text,
    Tel,
    Email,
    Date,
    Select,
    Textarea,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LazyImage {
    pub key: String,
    pub data_src: Option<String>,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            hamburger: "hamburger".to_string(),
            nav_menu: "navMenu".to_string(),
            navbar: "navbar".to_string(),
            nav_links: Vec::new(),
            anchors: Vec::new(),
            sections: Vec::new(),
            stat_sections: Vec::new(),
            form: None,
            faq_items: Vec::new(),
            lang_toggle: None,
            lang_notification: "langNotification".to_string(),
            lazy_images: Vec::new(),
            scroll_top_button: "scrollToTop".to_string(),
        }
    }
}

impl PageLayout {
    /// The practice home page: navigation, stats, FAQ, language toggle and the
    /// appointment form.
    pub fn practice_site() -> Self {
        let nav = |key: &str, href: &str| NavLink {
            key: key.to_string(),
            href: href.to_string(),
        };
        let anchor = |key: &str, href: &str| Anchor {
            key: key.to_string(),
            href: href.to_string(),
        };
        let section = |id: &str, offset_top: f64| Section {
            id: id.to_string(),
            offset_top,
        };
        let counter = |key: &str, target: u64| StatCounter {
            key: key.to_string(),
            target: Some(target),
            text: zero_text(),
        };
        let field = |key: &str, name: FormField, input_type: InputType| FieldLayout {
            key: key.to_string(),
            name,
            input_type,
            container: format!("{key}Group"),
            value: String::new(),
        };

        Self {
            nav_links: vec![
                nav("nav-home", "index.html"),
                nav("nav-about", "about.html"),
                nav("nav-services", "services.html"),
                nav("nav-contact", "contact.html"),
            ],
            anchors: vec![
                anchor("hero-book", "#appointment"),
                anchor("hero-faq", "#faq"),
                anchor("footer-top", "#"),
            ],
            sections: vec![
                section("experience", 640.0),
                section("faq", 2400.0),
                section("appointment", 3200.0),
            ],
            stat_sections: vec![
                StatSection {
                    key: "experience".to_string(),
                    counters: vec![
                        counter("stat-years", 15),
                        counter("stat-patients", 10_000),
                        counter("stat-surgeries", 2500),
                    ],
                },
                StatSection {
                    key: "testimonials-stats".to_string(),
                    counters: vec![counter("stat-rating", 98)],
                },
            ],
            form: Some(FormLayout {
                key: "appointmentForm".to_string(),
                message: "formMessage".to_string(),
                fields: vec![
                    field("fullName", FormField::FullName, InputType::Text),
                    field("phoneNumber", FormField::PhoneNumber, InputType::Tel),
                    field("emailAddress", FormField::EmailAddress, InputType::Email),
                    field("preferredDate", FormField::PreferredDate, InputType::Date),
                    field("preferredTime", FormField::PreferredTime, InputType::Select),
                    field("reasonForVisit", FormField::ReasonForVisit, InputType::Select),
                    field(
                        "additionalInfo",
                        FormField::AdditionalInformation,
                        InputType::Textarea,
                    ),
                ],
            }),
            faq_items: vec![
                "faq-1".to_string(),
                "faq-2".to_string(),
                "faq-3".to_string(),
                "faq-4".to_string(),
            ],
            lang_toggle: Some("langToggle".to_string()),
            lazy_images: vec![
                LazyImage {
                    key: "img-clinic".to_string(),
                    data_src: Some("images/clinic.jpg".to_string()),
                },
                LazyImage {
                    key: "img-doctor".to_string(),
                    data_src: Some("images/doctor.jpg".to_string()),
                },
            ],
            ..Self::default()
        }
    }

    /// True for the hamburger, the menu itself and anything inside the menu.
    pub fn is_nav_element(&self, key: &str) -> bool {
        key == self.hamburger || key == self.nav_menu || self.nav_links.iter().any(|l| l.key == key)
    }

    pub fn anchor(&self, key: &str) -> Option<&Anchor> {
        self.anchors.iter().find(|a| a.key == key)
    }

    /// Same-page target of a clickable element: hash anchors, and nav links whose
    /// href starts with `#`.
    pub fn anchor_href(&self, key: &str) -> Option<&str> {
        self.anchor(key)
            .map(|a| a.href.as_str())
            .or_else(|| {
                self.nav_links
                    .iter()
                    .find(|l| l.key == key)
                    .map(|l| l.href.as_str())
            })
            .filter(|href| href.starts_with('#'))
    }

    /// Every role the element plays, in binding order. A `#section` nav link is both
    /// a nav link and a hash anchor; a telephone input is also a form input.
    pub fn roles_for(&self, key: &str) -> Vec<ElementRole> {
        let mut roles = Vec::new();
        if key == self.hamburger {
            roles.push(ElementRole::Hamburger);
        }
        if key == self.nav_menu {
            roles.push(ElementRole::NavMenu);
        }
        if self.nav_links.iter().any(|l| l.key == key) {
            roles.push(ElementRole::NavLink);
        }
        if self.anchor_href(key).is_some() {
            roles.push(ElementRole::HashAnchor);
        }
        if self.stat_section(key).is_some() {
            roles.push(ElementRole::StatSection);
        }
        if self.form.as_ref().is_some_and(|f| f.key == key) {
            roles.push(ElementRole::AppointmentForm);
        }
        if self.faq_items.iter().any(|i| i == key) {
            roles.push(ElementRole::FaqQuestion);
        }
        if self.lang_toggle.as_deref() == Some(key) {
            roles.push(ElementRole::LangToggle);
        }
        if let Some(field) = self.field(key) {
            if field.input_type == InputType::Tel {
                roles.push(ElementRole::TelInput);
            }
            roles.push(ElementRole::FormInput);
        }
        if self.lazy_image(key).is_some() {
            roles.push(ElementRole::LazyImage);
        }
        if key == self.scroll_top_button {
            roles.push(ElementRole::ScrollTopButton);
        }
        roles
    }

    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn stat_section(&self, key: &str) -> Option<&StatSection> {
        self.stat_sections.iter().find(|s| s.key == key)
    }

    pub fn counter(&self, key: &str) -> Option<&StatCounter> {
        self.stat_sections
            .iter()
            .flat_map(|s| s.counters.iter())
            .find(|c| c.key == key)
    }

    pub fn field(&self, key: &str) -> Option<&FieldLayout> {
        self.form.as_ref()?.fields.iter().find(|f| f.key == key)
    }

    pub fn field_for(&self, name: FormField) -> Option<&FieldLayout> {
        self.form.as_ref()?.fields.iter().find(|f| f.name == name)
    }

    pub fn lazy_image(&self, key: &str) -> Option<&LazyImage> {
        self.lazy_images.iter().find(|i| i.key == key)
    }

    /// Role a form input plays: telephone inputs get the mask on top of the
    /// generic input behaviors.
    pub fn input_role(&self, key: &str) -> Option<ElementRole> {
        self.field(key).map(|f| match f.input_type {
            InputType::Tel => ElementRole::TelInput,
            _ => ElementRole::FormInput,
        })
    }
}
