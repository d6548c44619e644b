use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => f.write_str("male"),
            Gender::Female => f.write_str("female"),
        }
    }
}

/// One person and their chosen spirit animal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: &'static str,
    pub gender: Option<Gender>,
    pub animal: &'static str,
    /// Self-described personality, free text
    pub traits: Option<&'static str>,
}

impl DirectoryEntry {
    pub const fn new(name: &'static str, animal: &'static str) -> Self {
        Self {
            name,
            gender: None,
            animal,
            traits: None,
        }
    }

    pub const fn male(mut self) -> Self {
        self.gender = Some(Gender::Male);
        self
    }

    pub const fn female(mut self) -> Self {
        self.gender = Some(Gender::Female);
        self
    }

    pub const fn with_traits(mut self, traits: &'static str) -> Self {
        self.traits = Some(traits);
        self
    }
}

/// Renders as `Name (gender): Animal (traits)`
impl fmt::Display for DirectoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)?;
        if let Some(gender) = self.gender {
            write!(f, " ({gender})")?;
        }
        write!(f, ": {}", self.animal)?;
        if let Some(traits) = self.traits {
            write!(f, " ({traits})")?;
        }
        Ok(())
    }
}

pub static DIRECTORY: &[DirectoryEntry] = &[
    DirectoryEntry::new("Kingsley", "Dog"),
    DirectoryEntry::new("Opeyemi", "Elephant").male(),
    DirectoryEntry::new("Mayowa", "Arctic Wolf").male().with_traits(
        "thrives on teamwork, forms a strong collaborative pack, has incredible endurance, \
         is confident, tackles challenges with a solution-based mindset, is intelligent, \
         adaptable, strategic, and uses foresight to plan and execute in a fast-paced digital world",
    ),
    DirectoryEntry::new("Omole", "Dove").male().with_traits(
        "gentle, promotes peace and harmony, adaptable like a pigeon, thrives in diverse \
         environments, and values teamwork",
    ),
    DirectoryEntry::new("Gbemisola", "Dolphin").with_traits(
        "intelligent, playful, strong communication abilities, friendly, team-oriented, \
         engages and collaborates with users, making interactions enjoyable and productive",
    ),
    DirectoryEntry::new("Deborah", "Eagle").with_traits(
        "efficient, full of wisdom, courageous, and fearless in taking on new tasks",
    ),
    DirectoryEntry::new("Ekundayo", "Red Fox").with_traits(
        "embodies wisdom and intelligence, able to achieve even the most difficult assignments",
    ),
    DirectoryEntry::new("Daniel", "Octopus")
        .with_traits("intelligent, adaptable, and has strong problem-solving skills"),
    DirectoryEntry::new("Oyewole", "Cat").male(),
    DirectoryEntry::new("Seye", "Sea Turtle").male(),
    DirectoryEntry::new("Kelechi", "Owl"),
];
