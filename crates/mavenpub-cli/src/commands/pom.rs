use std::path::Path;

use miette::Result;

use mavenpub_ops::ops_pom;

pub fn exec(output: Option<&Path>) -> Result<()> {
    let project = super::current_project()?;
    match output {
        Some(dest) => ops_pom::write_to(&project, dest),
        None => {
            print!("{}", ops_pom::render(&project)?);
            Ok(())
        }
    }
}
