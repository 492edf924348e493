use miette::Result;

use mavenpub_core::config::GlobalConfig;
use mavenpub_ops::ops_check;

pub fn exec(verbose: bool) -> Result<()> {
    let project = super::current_project()?;
    let config = GlobalConfig::load()?;
    let report = ops_check::check(&project, &config)?;

    if verbose {
        for path in &report.artifacts {
            println!("  artifact   {}", path.display());
        }
        for name in &report.repositories {
            println!("  repository {name}");
        }
        if let Some(jdk) = &report.jdk {
            println!("  jdk        {jdk}");
        }
    }
    Ok(())
}
