use anyhow::Result;
use clap::{arg, command};
use tessellate::utils::file_handler::check_config_file;

fn main() -> Result<()> {
    let matches = command!("Tessellate Check")
        .about("Checks the tessellate configuration file")
        .args(&[
            arg!(-v --verbose "Outputs received configuration file."),
            arg!([INPUT] "Sets the input file to use. Uses the default location otherwise."),
        ])
        .get_matches();

    let config_file = matches.get_one::<String>("INPUT").map(String::as_str);
    let verbose = matches.get_flag("verbose");

    println!(
        "\x1b[0;94m::\x1b[0m tessellate version: {}",
        env!("CARGO_PKG_VERSION")
    );
    println!("\x1b[0;94m::\x1b[0m Loading configuration . . .");
    match check_config_file(config_file, verbose) {
        Ok(config) => {
            println!("\x1b[0;92m    -> Configuration loaded OK \x1b[0m");
            if verbose {
                dbg!(&config);
            }
            println!("\x1b[0;94m::\x1b[0m Checking values . . .");
            if config.check(verbose) {
                println!("\x1b[0;92m    -> Values OK \x1b[0m");
            }
        }
        Err(e) => {
            println!("Configuration failed. Reason: {e:?}");
        }
    }

    Ok(())
}
