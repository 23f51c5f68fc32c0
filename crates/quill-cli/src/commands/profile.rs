//! Profile command implementation.

use crate::cli::{ProfileAction, ProfileArgs};
use crate::config::{Config, Profile};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use quill_llm::ProviderKind;
use std::path::Path;

/// Execute the profile command.
///
/// Changes are written back to `config_path`.
pub fn execute_profile(
    args: ProfileArgs,
    config: &mut Config,
    config_path: &Path,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ProfileAction::List => list_profiles(config, formatter),
        ProfileAction::Show => show_active_profile(config, formatter),
        ProfileAction::Use { name } => use_profile(config, config_path, name, formatter),
        ProfileAction::Set {
            name,
            provider,
            api_key_env,
            model,
            endpoint,
        } => {
            let mut profile = Profile::for_provider(provider.into());
            profile.api_key_env = api_key_env;
            profile.llm.model = model;
            profile.llm.endpoint = endpoint;
            set_profile(config, config_path, name, profile, formatter)
        }
        ProfileAction::Delete { name } => delete_profile(config, config_path, name, formatter),
    }
}

/// List all profiles.
fn list_profiles(config: &Config, formatter: &Formatter) -> Result<()> {
    if config.profiles.is_empty() {
        println!("{}", formatter.info("No profiles configured"));
        return Ok(());
    }

    println!("Available profiles:");
    for (name, profile) in &config.profiles {
        if name == &config.active_profile {
            println!("* {}", formatter.success(name));
        } else {
            println!("  {}", name);
        }
        print_profile(profile, "    ");
    }

    Ok(())
}

/// Show the active profile.
fn show_active_profile(config: &Config, formatter: &Formatter) -> Result<()> {
    let profile = config.get_active_profile()?;

    println!("Active profile: {}", formatter.success(&config.active_profile));
    print_profile(profile, "  ");

    let key_state = if profile.resolve().api_key.is_some() {
        formatter.success("set")
    } else {
        formatter.warning("not set")
    };
    println!("  Key status: {}", key_state);

    Ok(())
}

fn print_profile(profile: &Profile, indent: &str) {
    println!("{}Provider: {}", indent, profile.llm.provider);
    println!("{}Model: {}", indent, profile.llm.model());
    println!("{}Endpoint: {}", indent, profile.llm.endpoint());
    println!("{}Key variable: {}", indent, profile.api_key_env());
}

/// Switch to a different profile.
fn use_profile(config: &mut Config, config_path: &Path, name: String, formatter: &Formatter) -> Result<()> {
    config.switch_profile(name.clone())?;
    config.save_to(config_path)?;
    println!(
        "{}",
        formatter.success(&format!("Switched to profile '{}'", name))
    );
    Ok(())
}

/// Create or update a profile.
fn set_profile(
    config: &mut Config,
    config_path: &Path,
    name: String,
    profile: Profile,
    formatter: &Formatter,
) -> Result<()> {
    profile
        .llm
        .validate()
        .map_err(|e| CliError::InvalidInput(e.to_string()))?;

    let action = if config.profiles.contains_key(&name) {
        "Updated"
    } else {
        "Created"
    };
    let provider: ProviderKind = profile.llm.provider;

    config.set_profile(name.clone(), profile);
    config.save_to(config_path)?;

    println!(
        "{}",
        formatter.success(&format!("{} {} profile '{}'", action, provider, name))
    );

    Ok(())
}

/// Delete a profile.
fn delete_profile(config: &mut Config, config_path: &Path, name: String, formatter: &Formatter) -> Result<()> {
    if name == config.active_profile {
        return Err(CliError::NotPermitted(
            "Cannot delete the active profile".to_string(),
        ));
    }

    if config.profiles.remove(&name).is_some() {
        config.save_to(config_path)?;
        println!(
            "{}",
            formatter.success(&format!("Deleted profile '{}'", name))
        );
    } else {
        println!(
            "{}",
            formatter.warning(&format!("Profile '{}' does not exist", name))
        );
    }

    Ok(())
}
