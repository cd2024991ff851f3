// Per-group interaction behavior: wave, feed, take a photo
//
// All variation dispatches on the Group tag inside one impl block - no
// class hierarchy. Side effects (photo artifacts, sound cues) are returned
// as data in Outcome::effect and interpreted by the shell; this module
// performs no I/O. Randomized reactions take the RNG as a parameter and
// map the roll through a deterministic table.

use rand::Rng;

use crate::primate::{Food, Group, Primate};

// ============================================================================
// OUTCOMES & EFFECTS
// ============================================================================

/// Result of a single interaction: text for the visitor, plus at most one
/// external effect for the shell to carry out.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub message: String,
    pub effect: Option<Effect>,
}

impl Outcome {
    fn text(message: String) -> Self {
        Outcome {
            message,
            effect: None,
        }
    }

    fn with_effect(message: String, effect: Effect) -> Self {
        Outcome {
            message,
            effect: Some(effect),
        }
    }
}

/// External side effect requested by an interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Write a photo artifact (ASCII blob) to the named file.
    SavePhoto {
        file_name: &'static str,
        blob: String,
    },
    /// Play a sound resource. Fire-and-forget; playback failures are
    /// ignored by the shell.
    PlaySound { resource: &'static str },
}

/// File the chimpanzee photo artifact is written to.
pub const PHOTO_FILE: &str = "zoo_photo.txt";

const ROAR_SOUND: &str = "sound_effects/gorilla_roar.mp3";
const CHEST_BEAT_SOUND: &str = "sound_effects/beating_chest.wav";

/// Bonobo reactions to a wave, indexed by roll (0..5).
const BONOBO_REACTIONS: [&str; 5] = [
    "smiled back",
    "waved back",
    "did a happy dance",
    "tapped on the glass",
    "walked away",
];

/// Gorilla reactions to a wave, indexed by roll (0..5). The first two
/// carry a sound cue.
const GORILLA_REACTIONS: [&str; 5] = [
    "let out a ROAR!",
    "beat his chest!",
    "waved back.",
    "tapped on the glass.",
    "walked away.",
];

const CHIMP_ART: &str = r"
        .-'''-.
       /  _ _  \
      |  (o)(o) |
      |   .--.  |
       \ (    ) /
        \ '--' /
     .--'`----'`--.
    /   |      |   \
   /    |      |    \
  |     |      |     |
";

// ============================================================================
// INTERACTIONS
// ============================================================================

impl Primate {
    /// Wave at the animal. Bonobos and gorillas react at random (1/5 each);
    /// everyone else waves back.
    pub fn wave(&self, rng: &mut impl Rng) -> Outcome {
        match self.group {
            Group::Bonobo => self.bonobo_wave(rng.gen_range(0..BONOBO_REACTIONS.len())),
            Group::Gorilla => self.gorilla_wave(rng.gen_range(0..GORILLA_REACTIONS.len())),
            _ => Outcome::text(format!(
                "You waved at {name}.\n{name} waved back!",
                name = self.name
            )),
        }
    }

    fn bonobo_wave(&self, roll: usize) -> Outcome {
        Outcome::text(format!(
            "You waved at {name}.\n{name} {reaction}.",
            name = self.name,
            reaction = BONOBO_REACTIONS[roll]
        ))
    }

    fn gorilla_wave(&self, roll: usize) -> Outcome {
        let message = format!(
            "You waved at {name}.\n{name} {reaction}",
            name = self.name,
            reaction = GORILLA_REACTIONS[roll]
        );
        match roll {
            0 => Outcome::with_effect(message, Effect::PlaySound { resource: ROAR_SOUND }),
            1 => Outcome::with_effect(
                message,
                Effect::PlaySound {
                    resource: CHEST_BEAT_SOUND,
                },
            ),
            _ => Outcome::text(message),
        }
    }

    /// Feed the animal. Capuchins only accept dates; an orangutan holding a
    /// camera only returns it for a banana; everyone else eats anything and
    /// stops being hungry.
    pub fn feed(&mut self, food: Food) -> Outcome {
        match self.group {
            Group::Orangutan if self.has_camera => {
                if food == Food::Banana {
                    self.has_camera = false;
                    self.hungry = false;
                    Outcome::text(format!(
                        "{name} loves bananas.\n{name} gave back your camera.",
                        name = self.name
                    ))
                } else {
                    // Eaten, but the camera stays put and so does the hunger
                    // that caused the grab.
                    Outcome::text(format!(
                        "{name} ate the {food} but didn't give your camera back.\nTry feeding {name} something else.",
                        name = self.name,
                        food = food
                    ))
                }
            }
            Group::Capuchin => {
                if food == Food::Date {
                    self.hungry = false;
                    Outcome::text(format!(
                        "You fed {name} a date.\n{name} loves dates.",
                        name = self.name
                    ))
                } else {
                    Outcome::text(format!(
                        "{name} doesn't like {food}s.\n{name} threw the {food} back at you!",
                        name = self.name,
                        food = food
                    ))
                }
            }
            _ => {
                self.hungry = false;
                Outcome::text(format!("{} ate the {}.", self.name, food))
            }
        }
    }

    /// Take a photo. Chimpanzees produce a saved photo artifact; a hungry
    /// orangutan grabs the camera instead and keeps it until fed a banana.
    pub fn take_photo(&mut self) -> Outcome {
        match self.group {
            Group::Chimpanzee => Outcome::with_effect(
                format!(
                    "You took a photo! Take a look at it in the {} file.",
                    PHOTO_FILE
                ),
                Effect::SavePhoto {
                    file_name: PHOTO_FILE,
                    blob: format!(
                        "Here is your photo of {} at Primate Paradise:\n{}",
                        self.name, CHIMP_ART
                    ),
                },
            ),
            Group::Orangutan if self.hungry => {
                if self.has_camera {
                    Outcome::text(format!(
                        "You can't take a photo because {name} has your camera.\nTry feeding {name} a banana in exchange for your camera.",
                        name = self.name
                    ))
                } else {
                    self.has_camera = true;
                    Outcome::text(format!(
                        "OH NO! {name} grabbed your camera!\nTry feeding {name} a banana in exchange for your camera.",
                        name = self.name
                    ))
                }
            }
            _ => Outcome::text(format!("You took a photo of {}.", self.name)),
        }
    }
}
