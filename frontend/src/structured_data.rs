//! schema.org description of the site owner, embedded as JSON-LD.

use serde::Serialize;

use crate::config;
use crate::content;

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: &'static str,
    pub job_title: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub same_as: Vec<&'static str>,
    pub knows_about: Vec<&'static str>,
    pub alumni_of: Organization,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Organization {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: &'static str,
}

pub fn person() -> Person {
    Person {
        context: "https://schema.org",
        kind: "Person",
        name: content::OWNER_NAME,
        job_title: content::JOB_TITLE,
        description: content::SUMMARY,
        url: config::get_site_url(),
        same_as: vec![content::LINKEDIN_URL, content::GITHUB_URL],
        knows_about: vec![
            "Data Analytics",
            "Machine Learning",
            "Django",
            "React",
            "Python",
            "Web Development",
        ],
        alumni_of: Organization {
            kind: "EducationalOrganization",
            name: content::ALMA_MATER,
        },
    }
}

pub fn person_json_ld() -> Result<String, serde_json::Error> {
    serde_json::to_string(&person())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    #[test]
    fn uses_schema_org_keys() {
        let value: Value = serde_json::from_str(&person_json_ld().unwrap()).unwrap();
        assert_eq!(value["@context"], "https://schema.org");
        assert_eq!(value["@type"], "Person");
        assert_eq!(value["jobTitle"], content::JOB_TITLE);
        assert_eq!(
            value["alumniOf"],
            json!({"@type": "EducationalOrganization", "name": "Career Point University"})
        );
    }

    #[test]
    fn profiles_are_listed_as_same_as() {
        let value = serde_json::to_value(person()).unwrap();
        assert_eq!(
            value["sameAs"],
            json!([content::LINKEDIN_URL, content::GITHUB_URL])
        );
        assert_eq!(value["knowsAbout"].as_array().map(Vec::len), Some(6));
    }
}
