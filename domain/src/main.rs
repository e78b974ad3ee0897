use std::env;
use std::process;

use domain::process_clip;
use domain::slug::slugify;
use serde_json::Value;

fn print_usage() {
    eprintln!(
        "{}\n\nUsage:\n  domain process '<json>'\n  domain slug <title...>\n\nNotes:\n  - `process` prints the normalized clip as JSON, or the validation message.",
        domain::about()
    );
}

fn run() -> Result<(), String> {
    let mut args = env::args().skip(1); // skip program name

    let Some(cmd) = args.next() else {
        print_usage();
        return Ok(());
    };

    match cmd.as_str() {
        "process" => {
            let Some(raw) = args.next() else {
                return Err("missing <json> for process".into());
            };
            // Undecodable input is handled like a missing body
            let payload: Value = serde_json::from_str(&raw).unwrap_or(Value::Null);
            match process_clip(&payload) {
                Ok(clip) => {
                    let out = serde_json::to_string_pretty(&clip)
                        .map_err(|e| format!("serialize failed: {}", e))?;
                    println!("{}", out);
                    Ok(())
                }
                Err(e) => Err(e.to_string()),
            }
        }
        "slug" => {
            let title: Vec<String> = args.collect();
            if title.is_empty() {
                return Err("missing <title> for slug".into());
            }
            println!("{}", slugify(title.join(" ").trim()));
            Ok(())
        }
        _ => {
            print_usage();
            Ok(())
        }
    }
}

fn main() {
    if let Err(msg) = run() {
        eprintln!("error: {}", msg);
        process::exit(1);
    }
}
