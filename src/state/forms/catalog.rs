//! Closed catalogs for the qualification form's enum-like fields

/// Fields of the qualification form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FieldId {
    Name,
    Email,
    Company,
    Website,
    ProjectType,
    Budget,
    Timeline,
    StartDate,
    Services,
    ContactMethod,
    Message,
    Newsletter,
}

impl FieldId {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Company => "Company",
            Self::Website => "Website",
            Self::ProjectType => "Project Type",
            Self::Budget => "Budget Range",
            Self::Timeline => "Project Timeline (in months)",
            Self::StartDate => "Preferred Start Date",
            Self::Services => "Services Required",
            Self::ContactMethod => "Preferred Contact Method",
            Self::Message => "Project Details",
            Self::Newsletter => "Newsletter",
        }
    }
}

/// Kind of project the prospect is asking about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectType {
    WebDevelopment,
    MobileApp,
    DesktopApplication,
    FullStack,
    Other,
}

impl ProjectType {
    pub const ALL: [Self; 5] = [
        Self::WebDevelopment,
        Self::MobileApp,
        Self::DesktopApplication,
        Self::FullStack,
        Self::Other,
    ];

    /// Stable identifier used when serializing a submission
    pub fn wire(&self) -> &'static str {
        match self {
            Self::WebDevelopment => "web-development",
            Self::MobileApp => "mobile-app",
            Self::DesktopApplication => "desktop-application",
            Self::FullStack => "full-stack",
            Self::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::WebDevelopment => "Web Development",
            Self::MobileApp => "Mobile App",
            Self::DesktopApplication => "Desktop Application",
            Self::FullStack => "Full Stack Solution",
            Self::Other => "Other",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::WebDevelopment => Self::MobileApp,
            Self::MobileApp => Self::DesktopApplication,
            Self::DesktopApplication => Self::FullStack,
            Self::FullStack => Self::Other,
            Self::Other => Self::WebDevelopment,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::WebDevelopment => Self::Other,
            Self::MobileApp => Self::WebDevelopment,
            Self::DesktopApplication => Self::MobileApp,
            Self::FullStack => Self::DesktopApplication,
            Self::Other => Self::FullStack,
        }
    }
}

/// Budget bracket for the engagement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetRange {
    From10kTo25k,
    From25kTo50k,
    From50kTo100k,
    Above100k,
}

impl BudgetRange {
    pub const ALL: [Self; 4] = [
        Self::From10kTo25k,
        Self::From25kTo50k,
        Self::From50kTo100k,
        Self::Above100k,
    ];

    /// Stable identifier used when serializing a submission
    pub fn wire(&self) -> &'static str {
        match self {
            Self::From10kTo25k => "10k-25k",
            Self::From25kTo50k => "25k-50k",
            Self::From50kTo100k => "50k-100k",
            Self::Above100k => "100k+",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::From10kTo25k => "$10,000 - $25,000",
            Self::From25kTo50k => "$25,000 - $50,000",
            Self::From50kTo100k => "$50,000 - $100,000",
            Self::Above100k => "$100,000+",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::From10kTo25k => Self::From25kTo50k,
            Self::From25kTo50k => Self::From50kTo100k,
            Self::From50kTo100k => Self::Above100k,
            Self::Above100k => Self::From10kTo25k,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::From10kTo25k => Self::Above100k,
            Self::From25kTo50k => Self::From10kTo25k,
            Self::From50kTo100k => Self::From25kTo50k,
            Self::Above100k => Self::From50kTo100k,
        }
    }
}

/// How the studio should reach back out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactMethod {
    #[default]
    Email,
    Phone,
}

impl ContactMethod {
    pub fn wire(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Phone => "Phone",
        }
    }

    pub fn toggle(&mut self) {
        *self = match self {
            Self::Email => Self::Phone,
            Self::Phone => Self::Email,
        };
    }
}

/// Service offerings selectable on the qualification form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Service {
    UiUxDesign,
    FrontendDevelopment,
    BackendDevelopment,
    MobileAppDevelopment,
    DevOps,
    QualityAssurance,
}

impl Service {
    pub const ALL: [Self; 6] = [
        Self::UiUxDesign,
        Self::FrontendDevelopment,
        Self::BackendDevelopment,
        Self::MobileAppDevelopment,
        Self::DevOps,
        Self::QualityAssurance,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::UiUxDesign => "UI/UX Design",
            Self::FrontendDevelopment => "Frontend Development",
            Self::BackendDevelopment => "Backend Development",
            Self::MobileAppDevelopment => "Mobile App Development",
            Self::DevOps => "DevOps",
            Self::QualityAssurance => "Quality Assurance",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod project_type {
        use super::*;

        #[test]
        fn test_next_cycles_through_all_variants() {
            let mut current = ProjectType::WebDevelopment;
            for _ in 0..ProjectType::ALL.len() {
                current = current.next();
            }
            assert_eq!(current, ProjectType::WebDevelopment);
        }

        #[test]
        fn test_prev_is_inverse_of_next() {
            for variant in ProjectType::ALL {
                assert_eq!(variant.next().prev(), variant);
            }
        }

        #[test]
        fn test_wire_values_are_distinct() {
            let wires: Vec<_> = ProjectType::ALL.iter().map(|p| p.wire()).collect();
            let mut deduped = wires.clone();
            deduped.dedup();
            assert_eq!(wires.len(), deduped.len());
        }
    }

    mod budget_range {
        use super::*;

        #[test]
        fn test_prev_is_inverse_of_next() {
            for variant in BudgetRange::ALL {
                assert_eq!(variant.next().prev(), variant);
            }
        }

        #[test]
        fn test_wire_values() {
            assert_eq!(BudgetRange::From10kTo25k.wire(), "10k-25k");
            assert_eq!(BudgetRange::Above100k.wire(), "100k+");
        }
    }

    mod contact_method {
        use super::*;

        #[test]
        fn test_default_is_email() {
            assert_eq!(ContactMethod::default(), ContactMethod::Email);
        }

        #[test]
        fn test_toggle_alternates() {
            let mut method = ContactMethod::Email;
            method.toggle();
            assert_eq!(method, ContactMethod::Phone);
            method.toggle();
            assert_eq!(method, ContactMethod::Email);
        }
    }

    mod service {
        use super::*;

        #[test]
        fn test_catalog_has_six_entries() {
            assert_eq!(Service::ALL.len(), 6);
        }

        #[test]
        fn test_labels_are_distinct() {
            for a in Service::ALL {
                for b in Service::ALL {
                    if a != b {
                        assert_ne!(a.label(), b.label());
                    }
                }
            }
        }
    }
}
