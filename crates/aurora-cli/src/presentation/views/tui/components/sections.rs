//! Profile section forms: one per tab, each editing its own sub-record.

use aurora_types::{BasicInfo, Education, Experience, ExperienceBracket, Gender, User};
use crossterm::event::KeyEvent;

use super::form::{ChoiceOption, FieldId, FormComponent, FormField};
use crate::presentation::view_models::{FormViewModel, Tab};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionForm {
    tab: Tab,
    form: FormComponent,
}

impl SectionForm {
    /// Fresh form state for `tab`, pre-filled from `user`.
    pub fn for_tab(tab: Tab, user: &User) -> Self {
        let form = match tab {
            Tab::Basic => basic_form(user),
            Tab::Education => education_form(&user.profile.education),
            Tab::Experience => experience_form(&user.profile.experience),
        };
        Self { tab, form }
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn form(&self) -> &FormComponent {
        &self.form
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> bool {
        self.form.handle_input(key)
    }

    /// Write this section's values into `user`.
    ///
    /// Only the Basic section touches `name`, `email` and `phone`.
    pub fn apply(&self, user: &mut User) {
        let f = &self.form;
        match self.tab {
            Tab::Basic => {
                user.profile.basic = BasicInfo {
                    first_name: f.trimmed(FieldId::FirstName),
                    last_name: f.trimmed(FieldId::LastName),
                    year_of_birth: f.trimmed(FieldId::YearOfBirth),
                    gender: Gender::from_value(f.value(FieldId::Gender)),
                    alt_phone: f.trimmed(FieldId::AltPhone),
                    address: f.trimmed(FieldId::Address),
                    pincode: f.trimmed(FieldId::Pincode),
                    domicile_country: f.trimmed(FieldId::DomicileCountry),
                    domicile_state: f.trimmed(FieldId::DomicileState),
                };
                user.email = f.trimmed(FieldId::Email);
                user.phone = f.trimmed(FieldId::Phone);
                if let Some(name) = user.composed_name() {
                    user.name = name;
                }
            }
            Tab::Education => {
                user.profile.education = Education {
                    school: f.trimmed(FieldId::School),
                    degree: f.trimmed(FieldId::Degree),
                    course: f.trimmed(FieldId::Course),
                    completion_year: f.trimmed(FieldId::CompletionYear),
                    grade: f.trimmed(FieldId::Grade),
                    skills: f.trimmed(FieldId::Skills),
                    projects: f.trimmed(FieldId::Projects),
                };
            }
            Tab::Experience => {
                user.profile.experience = Experience {
                    domain1: f.trimmed(FieldId::Domain1),
                    sub1: f.trimmed(FieldId::Sub1),
                    years1: ExperienceBracket::from_label(f.value(FieldId::Years1)),
                    domain2: f.trimmed(FieldId::Domain2),
                    sub2: f.trimmed(FieldId::Sub2),
                    years2: ExperienceBracket::from_label(f.value(FieldId::Years2)),
                    linkedin: f.trimmed(FieldId::LinkedIn),
                    resume: f.trimmed(FieldId::Resume),
                };
            }
        }
    }

    pub fn view_model(&self) -> FormViewModel {
        self.form
            .view_model(self.tab.section_title(), self.tab.save_label())
    }
}

fn basic_form(user: &User) -> FormComponent {
    let basic = &user.profile.basic;
    let genders = Gender::ALL
        .iter()
        .map(|g| ChoiceOption::new(g.as_str(), g.label()))
        .collect();

    FormComponent::new(vec![
        FormField::text(FieldId::FirstName, "First name", &basic.first_name),
        FormField::text(FieldId::LastName, "Last name", &basic.last_name),
        FormField::text(FieldId::Email, "Email ID", &user.email),
        FormField::text(FieldId::YearOfBirth, "Year of birth", &basic.year_of_birth)
            .with_placeholder("YYYY"),
        FormField::choice(FieldId::Gender, "Gender", genders, basic.gender.as_str()),
        FormField::text(FieldId::Phone, "Phone number", &user.phone),
        FormField::text(FieldId::AltPhone, "Alternate Phone no", &basic.alt_phone),
        FormField::textarea(FieldId::Address, "Address", &basic.address),
        FormField::text(FieldId::Pincode, "Pincode", &basic.pincode),
        FormField::text(FieldId::DomicileState, "Domicile state", &basic.domicile_state),
        FormField::text(
            FieldId::DomicileCountry,
            "Domicile country",
            &basic.domicile_country,
        ),
    ])
}

fn education_form(education: &Education) -> FormComponent {
    FormComponent::new(vec![
        FormField::text(FieldId::School, "School / College", &education.school),
        FormField::text(
            FieldId::Degree,
            "Highest degree or equivalent",
            &education.degree,
        ),
        FormField::text(FieldId::Course, "Course", &education.course),
        FormField::text(
            FieldId::CompletionYear,
            "Year of completion",
            &education.completion_year,
        )
        .with_placeholder("YYYY"),
        FormField::text(FieldId::Grade, "Grade", &education.grade),
        FormField::textarea(FieldId::Skills, "Skills", &education.skills),
        FormField::textarea(FieldId::Projects, "Projects", &education.projects),
    ])
}

// An untouched bracket choice shows (and saves) the first bracket.
fn bracket_field(id: FieldId, current: Option<ExperienceBracket>) -> FormField {
    let options = ExperienceBracket::ALL
        .iter()
        .map(|b| ChoiceOption::new(b.label(), b.label()))
        .collect();
    FormField::choice(
        id,
        "Experience",
        options,
        current.map(|b| b.label()).unwrap_or(""),
    )
}

fn experience_form(experience: &Experience) -> FormComponent {
    FormComponent::new(vec![
        FormField::text(FieldId::Domain1, "Domain", &experience.domain1),
        bracket_field(FieldId::Years1, experience.years1),
        FormField::text(FieldId::Sub1, "Sub-domain", &experience.sub1),
        FormField::text(FieldId::Domain2, "Domain", &experience.domain2),
        bracket_field(FieldId::Years2, experience.years2),
        FormField::text(FieldId::Sub2, "Sub-domain", &experience.sub2),
        FormField::text(FieldId::LinkedIn, "LinkedIn", &experience.linkedin)
            .with_placeholder("linkedin.com/in/username"),
        FormField::text(FieldId::Resume, "Resume", &experience.resume)
            .with_placeholder("myresume.pdf"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_into(section: &mut SectionForm, id: FieldId, text: &str) {
        section.form.focus(id);
        for c in text.chars() {
            section.handle_input(key(KeyCode::Char(c)));
        }
    }

    fn dave() -> User {
        User::new("u1", "Dave Richards", "dave@mail.com", "+91 8332883854")
    }

    #[test]
    fn test_basic_prefills_contact_details() {
        let section = SectionForm::for_tab(Tab::Basic, &dave());
        assert_eq!(section.form().value(FieldId::Email), "dave@mail.com");
        assert_eq!(section.form().value(FieldId::Phone), "+91 8332883854");
        assert_eq!(section.form().value(FieldId::Gender), "");
    }

    #[test]
    fn test_basic_save_recomposes_name() {
        let mut user = dave();
        let mut section = SectionForm::for_tab(Tab::Basic, &user);
        type_into(&mut section, FieldId::FirstName, " Grace ");
        type_into(&mut section, FieldId::LastName, "Hopper");
        section.apply(&mut user);

        assert_eq!(user.name, "Grace Hopper");
        assert_eq!(user.profile.basic.first_name, "Grace");
        assert_eq!(user.email, "dave@mail.com");
    }

    #[test]
    fn test_basic_save_keeps_name_when_parts_blank() {
        let mut user = dave();
        let mut section = SectionForm::for_tab(Tab::Basic, &user);
        type_into(&mut section, FieldId::Pincode, "560001");
        section.apply(&mut user);

        assert_eq!(user.name, "Dave Richards");
        assert_eq!(user.profile.basic.pincode, "560001");
    }

    #[test]
    fn test_basic_gender_choice() {
        let mut user = dave();
        let mut section = SectionForm::for_tab(Tab::Basic, &user);
        section.form.focus(FieldId::Gender);
        section.handle_input(key(KeyCode::Right));
        section.handle_input(key(KeyCode::Right));
        section.apply(&mut user);
        assert_eq!(user.profile.basic.gender, Gender::Female);
    }

    #[test]
    fn test_education_save_leaves_identity_alone() {
        let mut user = dave();
        user.profile.basic.first_name = "Someone".to_string();
        let mut section = SectionForm::for_tab(Tab::Education, &user);
        type_into(&mut section, FieldId::School, "IIT Madras");
        section.apply(&mut user);

        assert_eq!(user.profile.education.school, "IIT Madras");
        assert_eq!(user.name, "Dave Richards");
        assert_eq!(user.profile.basic.first_name, "Someone");
    }

    #[test]
    fn test_experience_untouched_bracket_saves_first_option() {
        let mut user = dave();
        let mut section = SectionForm::for_tab(Tab::Experience, &user);
        type_into(&mut section, FieldId::Domain1, "Compilers");
        section.form.focus(FieldId::Years2);
        section.handle_input(key(KeyCode::Left));
        section.apply(&mut user);

        let experience = &user.profile.experience;
        assert_eq!(experience.domain1, "Compilers");
        assert_eq!(experience.years1, Some(ExperienceBracket::LessThanOne));
        assert_eq!(experience.years2, Some(ExperienceBracket::SevenPlus));
    }

    #[test]
    fn test_experience_prefills_stored_bracket() {
        let mut user = dave();
        user.profile.experience.years1 = Some(ExperienceBracket::TwoToFour);
        let section = SectionForm::for_tab(Tab::Experience, &user);
        assert_eq!(section.form().value(FieldId::Years1), "2-4 years");
    }

    #[test]
    fn test_view_model_titles() {
        let vm = SectionForm::for_tab(Tab::Education, &dave()).view_model();
        assert_eq!(vm.title, "Education Details");
        assert_eq!(vm.submit_label, "Save education");
        assert_eq!(vm.fields.len(), 7);
    }
}
