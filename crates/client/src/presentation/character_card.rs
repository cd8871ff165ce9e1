//! Plain text character card

use std::fmt;

use cochar_shared::CharacterData;

use crate::application::GenerateError;

/// Text rendering of a generated character.
///
/// ```text
/// Mr. Adam Walkiewicz
/// 30 yo, author, PL
///
/// STR: 50  CON: 45  SIZ: 60  DEX: 55
/// APP: 40  EDU: 80  INT: 75  POW: 65
/// Luck: 35
///
/// Damage bonus: 0  Build: 0  Doge: 27  Move rate: 8
/// Hit points: 10  Magic points: 13  Sanity: 65
///
/// Skills
///   Library use 70%
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CharacterCard<'a> {
    character: &'a CharacterData,
}

impl<'a> CharacterCard<'a> {
    pub fn new(character: &'a CharacterData) -> Self {
        Self { character }
    }

    /// `Mr.` or `Ms.` followed by the full name.
    pub fn title(&self) -> String {
        let c = self.character;
        let honorific = if c.is_male() { "Mr." } else { "Ms." };
        format!("{honorific} {} {}", c.first_name, c.last_name)
    }

    pub fn summary(&self) -> String {
        let c = self.character;
        format!("{} yo, {}, {}", c.age, c.occupation, c.country)
    }

    /// Skill lines, first letter capitalized, sorted.
    pub fn skill_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .character
            .skills
            .iter()
            .map(|(name, value)| format!("{} {value}%", capitalize(name)))
            .collect();
        lines.sort();
        lines
    }
}

impl fmt::Display for CharacterCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.character;
        writeln!(f, "{}", self.title())?;
        writeln!(f, "{}", self.summary())?;
        writeln!(f)?;
        writeln!(
            f,
            "STR: {}  CON: {}  SIZ: {}  DEX: {}",
            c.strength, c.condition, c.size, c.dexterity
        )?;
        writeln!(
            f,
            "APP: {}  EDU: {}  INT: {}  POW: {}",
            c.appearance, c.education, c.intelligence, c.power
        )?;
        writeln!(f, "Luck: {}", c.luck)?;
        writeln!(f)?;
        writeln!(
            f,
            "Damage bonus: {}  Build: {}  Doge: {}  Move rate: {}",
            c.damage_bonus, c.build, c.doge, c.move_rate
        )?;
        write!(f, "Hit points: {}  Magic points: {}", c.hit_points, c.magic_points)?;
        if let Some(sanity) = c.sanity_points {
            write!(f, "  Sanity: {sanity}")?;
        }
        writeln!(f)?;

        let skills = self.skill_lines();
        if !skills.is_empty() {
            writeln!(f)?;
            writeln!(f, "Skills")?;
            for line in skills {
                writeln!(f, "  {line}")?;
            }
        }
        Ok(())
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// One line describing why a submission failed, for the user.
pub fn describe_failure(err: &GenerateError) -> String {
    match err {
        GenerateError::Invalid(report) => {
            let fields: Vec<&str> = report.failed_fields().iter().map(|f| f.as_str()).collect();
            format!("Please correct: {}", fields.join(", "))
        }
        GenerateError::Rejected(rejection) if rejection.is_rate_limited() => {
            format!("Too many requests, try again later ({rejection})")
        }
        GenerateError::Rejected(rejection) => format!("Warning: {rejection}"),
        other => other.to_string(),
    }
}
