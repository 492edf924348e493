use console::style;
use miette::Result;

use mavenpub_core::config::GlobalConfig;
use mavenpub_core::credentials::CredentialOrigin;
use mavenpub_ops::ops_publish;

const MASK: &str = "********";

/// Show, per configured repository, which source supplies its credentials.
pub fn exec(reveal: bool) -> Result<()> {
    let project = super::current_project()?;
    let config = GlobalConfig::load()?;
    let repositories = &project.manifest.repositories;

    if repositories.is_empty() {
        println!("No [repositories] configured.");
        return Ok(());
    }

    for (name, entry) in repositories {
        let lookup = ops_publish::credential_lookup(&project.root, name, &config)?;
        let (user_key, pass_key) = lookup.property_keys();
        let (user_var, pass_var) = lookup.env_var_names();

        println!("{} ({})", style(name).bold(), entry.url);
        print_value("username", lookup.username(), reveal);
        print_value("password", lookup.password(), reveal);
        println!("  keys: {user_key}/{pass_key}, ${user_var}/${pass_var}");
    }

    Ok(())
}

fn print_value(what: &str, found: Option<(CredentialOrigin, String)>, reveal: bool) {
    match found {
        Some((origin, value)) => {
            let shown = if reveal { value.as_str() } else { MASK };
            println!("  {what:<9} {shown}  (from {origin})");
        }
        None => println!("  {what:<9} {}", style("not set").yellow()),
    }
}
