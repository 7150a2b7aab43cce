use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileHeaderViewModel {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Profile editor tabs, in strip order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Basic,
    Education,
    Experience,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Basic, Tab::Education, Tab::Experience];

    pub fn index(&self) -> usize {
        match self {
            Tab::Basic => 0,
            Tab::Education => 1,
            Tab::Experience => 2,
        }
    }

    pub fn next(&self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn previous(&self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Basic => "Basic info",
            Tab::Education => "Education & skills",
            Tab::Experience => "Experience",
        }
    }

    pub fn section_title(&self) -> &'static str {
        match self {
            Tab::Basic => "Basic Details",
            Tab::Education => "Education Details",
            Tab::Experience => "Work Experience",
        }
    }

    pub fn save_label(&self) -> &'static str {
        match self {
            Tab::Basic => "Save basic info",
            Tab::Education => "Save education",
            Tab::Experience => "Save experience",
        }
    }

    pub fn saved_message(&self) -> &'static str {
        match self {
            Tab::Basic => "Basic info saved",
            Tab::Education => "Education saved",
            Tab::Experience => "Experience saved",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_cycling_wraps() {
        assert_eq!(Tab::Basic.next(), Tab::Education);
        assert_eq!(Tab::Experience.next(), Tab::Basic);
        assert_eq!(Tab::Basic.previous(), Tab::Experience);
    }

    #[test]
    fn test_index_matches_strip_order() {
        for (i, tab) in Tab::ALL.iter().enumerate() {
            assert_eq!(tab.index(), i);
        }
    }
}
