//! GROQ queries. Every query may reference the `$lang` parameter.

const PROJECT_PROJECTION: &str = r#"{
  _id,
  title,
  category,
  description,
  technologies,
  website,
  github,
  image {
    asset->{
      _id,
      url
    },
    alt
  },
  featured,
  nordcode,
  order
}"#;

const LANG_FILTER: &str = "(!defined(__i18n_lang) || __i18n_lang == $lang)";

pub(crate) fn all_projects() -> String {
    format!(
        r#"*[_type == "project" && {LANG_FILTER}] | order(order asc, _createdAt desc) {PROJECT_PROJECTION}"#
    )
}

pub(crate) fn featured_projects() -> String {
    format!(
        r#"*[_type == "project" && featured == true && {LANG_FILTER}] | order(order asc, _createdAt desc) {PROJECT_PROJECTION}"#
    )
}

pub(crate) const TECHNICAL_EXPERTISE: &str = r#"*[_type == "technicalExpertise"] | order(order asc) {
  _id,
  category,
  skills,
  color,
  order
}"#;

pub(crate) const ABOUT: &str = r#"*[_type == "about" && __i18n_lang == $lang][0] {
  _id,
  passionateTitle,
  passionateSubtitle,
  description1,
  description2,
  statistics[] {
    value,
    label,
    color,
    order
  },
  __i18n_lang
}"#;
