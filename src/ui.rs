// Interactive console shell for Primate Paradise
//
// Presentation glue only: nested menus, validated prompts, and table
// rendering. All record state lives in the Enclosure passed in from main;
// side effects requested by interactions (photo artifacts, sound cues) are
// carried out here, never in the core.

use anyhow::{Context, Result};
use chrono::Local;
use colored::Colorize;
use dialoguer::{Confirm, Input, Password, Select};
use std::fs;
use std::path::Path;

use primate_paradise::{Effect, Enclosure, Food, Group, Outcome, Primate};

/// Shared staff password. A single string is the whole auth model.
const STAFF_PASSWORD: &str = "banana";

const STAFF_MENU: [&str; 5] = [
    "View the enclosure",
    "Add a primate",
    "Remove a primate",
    "Update primate details",
    "Quit",
];

const VISITOR_MENU: [&str; 3] = [
    "Visit an enclosure",
    "Go to primate school",
    "Leave the zoo",
];

const ACTION_MENU: [&str; 4] = ["Wave", "Feed", "Take a photo", "Go back"];

/// Display titles for the five enclosures, in Group::ALL order.
const ENCLOSURE_TITLES: [&str; 5] = [
    "Crafty Chimpanzees",
    "Outrageous Orangutans",
    "Beautiful Bonobos",
    "Cheeky Capuchins",
    "Grizzly Gorillas",
];

// ============================================================================
// LOGIN
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Staff,
    Visitor,
}

/// Ask whether the user is staff or a visitor; staff must give the shared
/// password. Re-prompts until a valid login.
pub fn login() -> Result<Role> {
    loop {
        let choice = Select::new()
            .with_prompt("Are you staff or a visitor?")
            .items(&["Staff", "Visitor"])
            .default(0)
            .interact()?;

        if choice == 1 {
            println!("{} Welcome to Primate Paradise!", "✓".green());
            return Ok(Role::Visitor);
        }

        let password = Password::new()
            .with_prompt("What is the password?")
            .interact()?;
        if password == STAFF_PASSWORD {
            println!("{} Welcome back!", "✓".green());
            return Ok(Role::Staff);
        }
        println!("{} Incorrect password.", "✗".red());
    }
}

// ============================================================================
// STAFF MENU
// ============================================================================

pub fn run_staff(enclosure: &mut Enclosure, data_path: &Path) -> Result<()> {
    loop {
        println!();
        let choice = Select::new()
            .with_prompt("Staff menu")
            .items(&STAFF_MENU)
            .default(0)
            .interact()?;

        match choice {
            0 => {
                println!("\n=== Primates in the enclosure ===\n");
                print_roster(enclosure);
            }
            1 => add_primate(enclosure, data_path)?,
            2 => remove_primate(enclosure, data_path)?,
            3 => update_primate(enclosure, data_path)?,
            _ => return Ok(()),
        }
    }
}

/// Collect validated details for a new arrival, confirm them, then add the
/// record and rewrite the enclosure file.
fn add_primate(enclosure: &mut Enclosure, data_path: &Path) -> Result<()> {
    println!("\n=== Add a primate to the enclosure ===\n");

    loop {
        let group = prompt_group()?;
        let name = prompt_name()?;
        let age = prompt_age()?;
        let weight = prompt_weight()?;
        let description = prompt_description()?;

        println!("\n{}", "NEW PRIMATE".bold());
        println!("{:<14} {}", "Group:", group);
        println!("{:<14} {}", "Name:", name);
        println!("{:<14} {}", "Age:", age);
        println!("{:<14} {}", "Weight:", weight);
        println!("{:<14} {}", "Description:", description);

        let confirmed = Confirm::new()
            .with_prompt("Are these details correct?")
            .interact()?;
        if !confirmed {
            println!("\n== Please enter the details again. ==\n");
            continue;
        }

        let primate = Primate::new(group, name, age, weight, description);
        println!(
            "{} {} has been added to the {} enclosure!",
            "✓".green(),
            capitalize(&primate.name),
            primate.group
        );
        enclosure.add(primate);
        save_enclosure(enclosure, data_path)?;
        return Ok(());
    }
}

fn remove_primate(enclosure: &mut Enclosure, data_path: &Path) -> Result<()> {
    println!("\n=== Remove a primate from the enclosure ===\n");

    let Some((group, name)) = select_primate(enclosure)? else {
        return Ok(());
    };

    let confirmed = Confirm::new()
        .with_prompt(format!("Are you sure you want to remove {}?", capitalize(&name)))
        .default(false)
        .interact()?;
    if confirmed {
        enclosure.remove(group, &name);
        save_enclosure(enclosure, data_path)?;
        println!(
            "{} {} has been removed from the enclosure.",
            "✓".green(),
            capitalize(&name)
        );
    }
    Ok(())
}

fn update_primate(enclosure: &mut Enclosure, data_path: &Path) -> Result<()> {
    println!("\n=== Update primate details ===\n");

    loop {
        let Some((group, name)) = select_primate(enclosure)? else {
            return Ok(());
        };

        let field = Select::new()
            .with_prompt("What would you like to update?")
            .items(&["Name", "Age", "Weight", "Description", "Back"])
            .default(0)
            .interact()?;

        let touched = match field {
            0 => {
                let new_name = prompt_name()?;
                enclosure.update(group, &name, |p| p.name = new_name)
            }
            1 => {
                let new_age = prompt_age()?;
                enclosure.update(group, &name, |p| p.age = new_age)
            }
            2 => {
                let new_weight = prompt_weight()?;
                enclosure.update(group, &name, |p| p.weight = new_weight)
            }
            3 => {
                let new_description = prompt_description()?;
                enclosure.update(group, &name, |p| p.description = new_description)
            }
            _ => continue,
        };

        if touched {
            save_enclosure(enclosure, data_path)?;
            println!("{} {}'s details have been updated.", "✓".green(), capitalize(&name));
        }
    }
}

fn save_enclosure(enclosure: &Enclosure, data_path: &Path) -> Result<()> {
    enclosure
        .save(data_path)
        .with_context(|| format!("failed to save {}", data_path.display()))
}

/// Walk the user through picking a group, then a primate by name.
/// Returns None if they back out at either step.
fn select_primate(enclosure: &Enclosure) -> Result<Option<(Group, String)>> {
    loop {
        let groups = enclosure.groups_present();
        if groups.is_empty() {
            println!("{} The enclosure is empty.", "ℹ".blue());
            return Ok(None);
        }

        let mut group_items: Vec<String> = groups.iter().map(Group::to_string).collect();
        group_items.push("Back".to_string());
        let choice = Select::new()
            .with_prompt("Select a group")
            .items(&group_items)
            .default(0)
            .interact()?;
        if choice == groups.len() {
            return Ok(None);
        }
        let group = groups[choice];

        let names = enclosure.names_of(group);
        let mut name_items: Vec<String> = names.iter().map(|n| capitalize(n)).collect();
        name_items.push("Back".to_string());
        let choice = Select::new()
            .with_prompt(format!("Select a {}", group.to_string().to_lowercase()))
            .items(&name_items)
            .default(0)
            .interact()?;
        if choice == names.len() {
            continue; // back to group selection
        }
        return Ok(Some((group, names[choice].clone())));
    }
}

// ============================================================================
// VISITOR MENU
// ============================================================================

pub fn run_visitor(enclosure: &mut Enclosure) -> Result<()> {
    loop {
        println!();
        let choice = Select::new()
            .with_prompt("What would you like to do?")
            .items(&VISITOR_MENU)
            .default(0)
            .interact()?;

        match choice {
            0 => visit_enclosures(enclosure)?,
            1 => primate_school()?,
            _ => return Ok(()),
        }
    }
}

fn visit_enclosures(enclosure: &mut Enclosure) -> Result<()> {
    loop {
        let mut items: Vec<&str> = ENCLOSURE_TITLES.to_vec();
        items.push("Back");
        let choice = Select::new()
            .with_prompt("Which enclosure would you like to visit?")
            .items(&items)
            .default(0)
            .interact()?;
        if choice == ENCLOSURE_TITLES.len() {
            return Ok(());
        }

        println!("\n=== Visiting {} ===\n", ENCLOSURE_TITLES[choice]);
        enter_enclosure(enclosure, Group::ALL[choice])?;
    }
}

/// Numbered table of the group's residents; picking a number starts an
/// interaction, 0 backs out.
fn enter_enclosure(enclosure: &mut Enclosure, group: Group) -> Result<()> {
    loop {
        let names = enclosure.names_of(group);
        if names.is_empty() {
            println!(
                "{} No {}s are in the enclosure right now.",
                "ℹ".blue(),
                group.to_string().to_lowercase()
            );
            return Ok(());
        }

        print_numbered_table(&names, &format!("{}s in the enclosure", group));

        let total = names.len();
        let number: usize = Input::new()
            .with_prompt("Enter a primate number (0 to go back)")
            .validate_with(move |n: &usize| -> Result<(), &str> {
                if *n <= total {
                    Ok(())
                } else {
                    Err("Number out of range.")
                }
            })
            .interact_text()?;
        if number == 0 {
            return Ok(());
        }

        let name = names[number - 1].clone();
        if let Some(primate) = enclosure.get_mut(group, &name) {
            interact(primate)?;
        }
    }
}

fn interact(primate: &mut Primate) -> Result<()> {
    println!("\n{}\n", primate.describe());

    let mut rng = rand::thread_rng();
    loop {
        let choice = Select::new()
            .with_prompt("What would you like to do?")
            .items(&ACTION_MENU)
            .default(0)
            .interact()?;

        match choice {
            0 => deliver(primate.wave(&mut rng)),
            1 => {
                if let Some(food) = prompt_food()? {
                    deliver(primate.feed(food));
                }
            }
            2 => deliver(primate.take_photo()),
            _ => return Ok(()),
        }
    }
}

/// Print the outcome text, then carry out any requested side effect.
fn deliver(outcome: Outcome) {
    println!("\n{}\n", outcome.message);
    if let Some(effect) = outcome.effect {
        apply_effect(effect);
    }
}

fn apply_effect(effect: Effect) {
    match effect {
        Effect::SavePhoto { file_name, blob } => {
            let stamped = format!("{}\nTaken on {}\n", blob, Local::now().format("%Y-%m-%d %H:%M"));
            if let Err(e) = fs::write(file_name, stamped) {
                // Non-fatal: the visit carries on without the souvenir.
                println!("{} Could not save your photo: {}", "✗".red(), e);
            }
        }
        Effect::PlaySound { resource } => {
            // Fire-and-forget audio cue; a real speaker backend would go
            // here and its failures would be ignored the same way.
            println!("{} {}", "♪".cyan(), resource);
        }
    }
}

fn primate_school() -> Result<()> {
    loop {
        let mut items: Vec<String> = Group::ALL.iter().map(|g| format!("{}s", g)).collect();
        items.push("Back".to_string());
        let choice = Select::new()
            .with_prompt("Which primates would you like to learn about?")
            .items(&items)
            .default(0)
            .interact()?;
        if choice == Group::ALL.len() {
            return Ok(());
        }

        let group = Group::ALL[choice];
        let info = group.info();
        println!("\n=== {}s ===\n", group);
        println!("{:<18} {}", "Scientific name:".bold(), info.scientific_name);
        println!("{:<18} {}", "Population:".bold(), info.population);
        println!("{:<18} {}", "Status:".bold(), info.endangered_level);
        println!("{:<18} {}", "Habitat:".bold(), info.habitat);
        println!("{:<18} {}", "Fun fact:".bold(), info.fact);
        println!("{:<18} {}", "Easter egg:".bold(), info.easter_egg);
        println!();
    }
}

// ============================================================================
// PROMPTS & TABLES
// ============================================================================

fn prompt_group() -> Result<Group> {
    let items: Vec<&str> = Group::ALL.iter().map(Group::as_str).collect();
    let choice = Select::new()
        .with_prompt("What group does the primate belong to?")
        .items(&items)
        .default(0)
        .interact()?;
    Ok(Group::ALL[choice])
}

fn prompt_name() -> Result<String> {
    let name: String = Input::new()
        .with_prompt("What is the name of the primate?")
        .validate_with(|input: &String| -> Result<(), &str> {
            let trimmed = input.trim();
            if trimmed.is_empty() {
                Err("The name must not be empty.")
            } else if trimmed
                .chars()
                .all(|c| c.is_alphabetic() || c.is_whitespace())
            {
                Ok(())
            } else {
                Err("The name must only contain alphabetical characters.")
            }
        })
        .interact_text()?;
    Ok(name.trim().to_string())
}

fn prompt_age() -> Result<u32> {
    let age = Input::new()
        .with_prompt("How old is the primate?")
        .validate_with(|age: &u32| -> Result<(), &str> {
            if *age > 60 {
                Err("The age of the primate must be 60 or less.")
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(age)
}

fn prompt_weight() -> Result<u32> {
    let weight = Input::new()
        .with_prompt("How much does the primate weigh in kg?")
        .validate_with(|weight: &u32| -> Result<(), &str> {
            if *weight <= 1 || *weight > 200 {
                Err("The weight of the primate must be more than 1kg and no more than 200kg.")
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(weight)
}

fn prompt_description() -> Result<String> {
    loop {
        let description: String = Input::new()
            .with_prompt("Provide a brief description of the primate")
            .interact_text()?;
        let keep = Confirm::new()
            .with_prompt("Would you like to keep this description?")
            .default(true)
            .interact()?;
        if keep {
            return Ok(description);
        }
    }
}

fn prompt_food() -> Result<Option<Food>> {
    let choice = Select::new()
        .with_prompt("What would you like to feed them?")
        .items(&["Apple", "Banana", "Cucumber", "Date", "Never mind"])
        .default(0)
        .interact()?;
    Ok(Food::ALL.get(choice).copied())
}

fn print_roster(enclosure: &Enclosure) {
    if enclosure.is_empty() {
        println!("{} The enclosure is empty.", "ℹ".blue());
        return;
    }
    println!("{:<12} {}", "GROUP".bold(), "NAME".bold());
    for primate in enclosure.iter() {
        println!("{:<12} {}", primate.group.to_string(), primate.name);
    }
}

fn print_numbered_table(items: &[String], header: &str) {
    println!("{:>3}  {}", "#", header.bold());
    for (i, item) in items.iter().enumerate() {
        println!("{:>3}  {}", i + 1, capitalize(item));
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
