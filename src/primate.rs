// Primate records, group tags, and per-group reference data
//
// One record struct tagged with a Group enum replaces the original
// five-subclass hierarchy; everything group-specific that is pure data
// (scientific name, conservation status, ...) lives in GroupInfo tables.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// GROUPS
// ============================================================================

/// The five fixed primate groups in the zoo.
///
/// Display/persisted form is the capitalized tag ("Chimpanzee"); user input
/// is matched case-insensitively via [`Group::parse`], while the persisted
/// file tag is matched exactly via [`Group::from_tag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Group {
    Chimpanzee,
    Orangutan,
    Bonobo,
    Capuchin,
    Gorilla,
}

impl Group {
    /// All groups, in the fixed order used for roster listings.
    pub const ALL: [Group; 5] = [
        Group::Chimpanzee,
        Group::Orangutan,
        Group::Bonobo,
        Group::Capuchin,
        Group::Gorilla,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Group::Chimpanzee => "Chimpanzee",
            Group::Orangutan => "Orangutan",
            Group::Bonobo => "Bonobo",
            Group::Capuchin => "Capuchin",
            Group::Gorilla => "Gorilla",
        }
    }

    /// Parse user input, case-insensitively ("gorilla" -> Gorilla).
    pub fn parse(input: &str) -> Option<Group> {
        Group::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(input.trim()))
    }

    /// Parse a persisted tag. Exact match on the capitalized form only.
    pub fn from_tag(tag: &str) -> Option<Group> {
        Group::ALL.into_iter().find(|g| g.as_str() == tag)
    }

    /// Static reference data for this group.
    pub fn info(&self) -> &'static GroupInfo {
        match self {
            Group::Chimpanzee => &CHIMPANZEE_INFO,
            Group::Orangutan => &ORANGUTAN_INFO,
            Group::Bonobo => &BONOBO_INFO,
            Group::Capuchin => &CAPUCHIN_INFO,
            Group::Gorilla => &GORILLA_INFO,
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// FOOD
// ============================================================================

/// The four foods on the feeding menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Food {
    Apple,
    Banana,
    Cucumber,
    Date,
}

impl Food {
    pub const ALL: [Food; 4] = [Food::Apple, Food::Banana, Food::Cucumber, Food::Date];

    /// Lower-case name as it appears in response text.
    pub fn as_str(&self) -> &'static str {
        match self {
            Food::Apple => "apple",
            Food::Banana => "banana",
            Food::Cucumber => "cucumber",
            Food::Date => "date",
        }
    }
}

impl fmt::Display for Food {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// GROUP REFERENCE DATA
// ============================================================================

/// Read-only educational data shown on the "primate school" pages.
#[derive(Debug, Clone, Copy)]
pub struct GroupInfo {
    pub scientific_name: &'static str,
    pub population: &'static str,
    pub endangered_level: &'static str,
    pub habitat: &'static str,
    pub fact: &'static str,
    pub easter_egg: &'static str,
}

static CHIMPANZEE_INFO: GroupInfo = GroupInfo {
    scientific_name: "Pan troglodytes",
    population: "172,700 to 299,700",
    endangered_level: "Endangered",
    habitat: "Forests (moist and dry forests), Savannah Woodlands, and Grassland-Forest mosaics",
    fact: "Chimpanzees can live to be 50 years old in the wild.",
    easter_egg: "Saves your photo to the zoo_photo.txt file.",
};

static ORANGUTAN_INFO: GroupInfo = GroupInfo {
    scientific_name: "Pongo abelii, Pongo pygmaeus",
    population: "About 104,700 (Bornean), 13,846 (Sumatran), 800 (Tapanuli)",
    endangered_level: "Critically Endangered",
    habitat: "Orangutans are found only in the rain forests of the Southeast Asian islands of Borneo and Sumatra.",
    fact: "Orangutans are the heaviest tree-dwelling animal. They can weigh up to 200 pounds (~90kg).",
    easter_egg: "If they are hungry, they'll steal your camera when you try to take a picture. They will return it for a banana.",
};

static BONOBO_INFO: GroupInfo = GroupInfo {
    scientific_name: "Pan paniscus",
    population: "10,000 to 50,000",
    endangered_level: "Endangered",
    habitat: "Bonobos live in the rainforests of the Congo Basin in Africa.",
    fact: "Bonobos and chimpanzees both share 98.7% of their DNA with humans - making the two species our closest living relatives.",
    easter_egg: "Displays a random reaction when you wave at them.",
};

static CAPUCHIN_INFO: GroupInfo = GroupInfo {
    scientific_name: "Cebus capucinus",
    population: "Last estimate was 54,000 in 2007",
    endangered_level: "Vulnerable",
    habitat: "The White Faced Capuchins live in forest and rainforests of Central America and Northern South America",
    fact: "The White Faced Capuchin lives between 15-20 years in the wild, but can live up to 45 years in captivity.",
    easter_egg: "Picky with their food - they really like dates.",
};

static GORILLA_INFO: GroupInfo = GroupInfo {
    scientific_name: "Gorilla gorilla and Gorilla beringei",
    population: "250,000 - 300,000",
    endangered_level: "Endangered",
    habitat: "Gorillas typically live in the lowland tropical rainforests of Central Africa.",
    fact: "To intimidate rivals, male gorillas strut with stiff legs, beat their chests, and use vocalisations like roars or hoots.",
    easter_egg: "Beats their chest or lets out a roar when you wave at them.",
};

// ============================================================================
// PRIMATE RECORD
// ============================================================================

/// A single animal in the enclosure.
///
/// Age and weight bounds (0-60 years, 2-200 kg) are enforced by the input
/// prompts at creation/update time, not by the record itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Primate {
    pub group: Group,
    pub name: String,
    pub age: u32,
    pub weight: u32,
    pub description: String,

    /// Cleared by a successful feeding; gates group-specific behavior.
    pub hungry: bool,

    /// Orangutans only: true while the animal is holding a visitor's
    /// camera. Transient - never persisted, resets to false on reload.
    #[serde(skip)]
    pub has_camera: bool,
}

impl Primate {
    /// New arrival. Every primate starts out hungry.
    pub fn new(group: Group, name: String, age: u32, weight: u32, description: String) -> Self {
        Primate {
            group,
            name,
            age,
            weight,
            description,
            hungry: true,
            has_camera: false,
        }
    }

    /// Case-insensitive name match, used by all store lookups.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// One-paragraph description shown when a visitor selects the animal.
    pub fn describe(&self) -> String {
        format!(
            "{} is a {} year old, {}kg {}.\n{}",
            self.name, self.age, self.weight, self.group, self.description
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_parse_is_case_insensitive() {
        assert_eq!(Group::parse("gorilla"), Some(Group::Gorilla));
        assert_eq!(Group::parse("  CHIMPANZEE "), Some(Group::Chimpanzee));
        assert_eq!(Group::parse("lemur"), None);
    }

    #[test]
    fn group_tag_is_exact() {
        assert_eq!(Group::from_tag("Orangutan"), Some(Group::Orangutan));
        // The persisted form is case-sensitive.
        assert_eq!(Group::from_tag("orangutan"), None);
        assert_eq!(Group::from_tag("ORANGUTAN"), None);
    }

    #[test]
    fn new_primate_starts_hungry_without_camera() {
        let p = Primate::new(
            Group::Bonobo,
            "Kanzi".to_string(),
            32,
            40,
            "Knows lexigrams.".to_string(),
        );
        assert!(p.hungry);
        assert!(!p.has_camera);
    }

    #[test]
    fn describe_mentions_vitals() {
        let p = Primate::new(
            Group::Gorilla,
            "Koko".to_string(),
            12,
            90,
            "Gentle giant.".to_string(),
        );
        let text = p.describe();
        assert!(text.contains("Koko is a 12 year old, 90kg Gorilla."));
        assert!(text.contains("Gentle giant."));
    }

    #[test]
    fn every_group_has_reference_data() {
        for group in Group::ALL {
            let info = group.info();
            assert!(!info.scientific_name.is_empty());
            assert!(!info.population.is_empty());
            assert!(!info.endangered_level.is_empty());
            assert!(!info.habitat.is_empty());
            assert!(!info.fact.is_empty());
            assert!(!info.easter_egg.is_empty());
        }
    }

    #[test]
    fn is_named_ignores_case() {
        let p = Primate::new(
            Group::Capuchin,
            "Marcel".to_string(),
            5,
            4,
            "Television star.".to_string(),
        );
        assert!(p.is_named("marcel"));
        assert!(p.is_named("MARCEL"));
        assert!(!p.is_named("marcell"));
    }
}
