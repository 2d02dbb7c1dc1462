use std::fs;
use std::collections::HashMap;
use std::env;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct ConfigFile {
    pub lift: HashMap<String, i32>,
}

#[derive(Debug, Clone)]
pub struct LiftSettings {
    pub ground_floor: i32,
    pub floor_range: Option<(i32, i32)>,
}

#[derive(Debug, Clone)]
pub struct LiftConfig {
    pub lift: LiftSettings,
}

fn read_config_file() -> Result<ConfigFile, serde_json::Error> {
    let file_path = "config.json";
    let fallback_file_path = "_config.json";
    let config_contents = match fs::read_to_string(file_path) {
        Ok(content) => content,
        Err(_) => {
            println!("No configuration file provided, using default settings...");
            fs::read_to_string(fallback_file_path).unwrap()
        },
    };
    serde_json::from_str(&config_contents)
}

// range validation is only enabled when both bounds are configured
fn floor_range(config_file: &ConfigFile) -> Option<(i32, i32)> {
    match (config_file.lift.get("min_floor"), config_file.lift.get("max_floor")) {
        (Some(min), Some(max)) => Some((*min, *max)),
        _ => None,
    }
}

fn parse_env_args(default_ground_floor: i32, args: &[String]) -> i32 {
    let mut ground_floor = default_ground_floor;

    for arg_pair in args.rchunks_exact(2) {
        match arg_pair[0].as_str() {
            "--groundfloor" => {
                ground_floor = match arg_pair[1].parse::<i32>() {
                    Ok(num) => num,
                    Err(_) => {
                        println!("ground floor {} is not a number, skipping...", arg_pair[1]);
                        ground_floor
                    },
                };
            },
            _ => {println!("illegal argument {}, skipping...", arg_pair[0]);},
        }
    }
    ground_floor
}

impl LiftConfig {
    pub fn get() -> Self {
        let config_file = read_config_file().unwrap();
        let args: Vec<String> = env::args().collect();
        let ground_floor = parse_env_args(config_file.lift["ground_floor"], &args);

        LiftConfig {
            lift: LiftSettings {
                ground_floor: ground_floor,
                floor_range: floor_range(&config_file),
            },
        }
    }
}
