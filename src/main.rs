/// Headless inspection tool for role permission lists and persisted region maps.
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use cms_admin::{AppConfig, logging};

    let config = AppConfig::load_from_default_path().unwrap_or_default();
    logging::init(config.preferences.log_level);

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(e) = cli::run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use std::error::Error;
    use std::path::Path;

    use cms_admin::RegionMap;
    use cms_admin::permission::{group_list_into_form_state, group_list_into_table_rows};
    use serde_json::json;

    const USAGE: &str = "usage:\n  cms-admin permissions <catalogue.json> [assigned.json]\n  cms-admin regions <regions.json>";

    pub fn run(args: &[String]) -> Result<(), Box<dyn Error>> {
        match args {
            [command, catalogue] if command == "permissions" => permissions(catalogue, None),
            [command, catalogue, assigned] if command == "permissions" => {
                permissions(catalogue, Some(assigned))
            }
            [command, regions_path] if command == "regions" => regions(regions_path),
            _ => Err(USAGE.into()),
        }
    }

    fn read_list(path: impl AsRef<Path>) -> Result<Vec<String>, Box<dyn Error>> {
        let path = path.as_ref();
        log::debug!("Reading permission list {:?}", path);
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    fn permissions(catalogue: &str, assigned: Option<&String>) -> Result<(), Box<dyn Error>> {
        let rows = group_list_into_table_rows(&read_list(catalogue)?);
        let assigned = match assigned {
            Some(path) => read_list(path)?,
            None => Vec::new(),
        };
        let form = group_list_into_form_state(&assigned);
        log::info!("{} modules in catalogue, {} with assignments", rows.len(), form.len());

        let out = json!({ "rows": rows, "form": form });
        println!("{}", serde_json::to_string_pretty(&out)?);
        Ok(())
    }

    fn regions(path: &str) -> Result<(), Box<dyn Error>> {
        let map = RegionMap::from_json(&std::fs::read_to_string(path)?)?;
        println!("{:>6} {:>8} {:>12}", "id", "vertices", "area");
        for (id, region) in map.iter() {
            println!("{:>6} {:>8} {:>12.1}", id, region.len(), region.area());
        }
        log::info!("{} regions, latest id {}", map.len(), map.max_id());
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}
