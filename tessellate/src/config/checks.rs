use super::Config;
use tessellate_core::layouts::parse_layouts;
use tessellate_core::models::Margins;
use tracing_subscriber::EnvFilter;

const SIDES: [&str; 4] = ["top", "right", "bottom", "left"];

impl Config {
    /// Every problem found in the configuration. Values out of range are still clamped at
    /// runtime, this only tells the user about them.
    #[must_use]
    pub fn problems(&self) -> Vec<String> {
        let mut problems = vec![];
        self.check_split_ratio(&mut problems);
        self.check_gaps(&mut problems);
        self.check_layouts(&mut problems);
        self.check_log_level(&mut problems);
        problems
    }

    /// Prints the outcome of every check. Returns true if nothing was found.
    pub fn check(&self, verbose: bool) -> bool {
        if verbose {
            println!("Checking split ratio, gaps, layouts and log level.");
        }
        let problems = self.problems();
        for problem in &problems {
            println!("\x1b[1;91mERROR:\x1b[0m\x1b[1m {problem} \x1b[0m");
        }
        if problems.is_empty() && verbose {
            println!("All values are okay.");
        }
        problems.is_empty()
    }

    fn check_split_ratio(&self, problems: &mut Vec<String>) {
        if !(self.split_ratio > 0.0 && self.split_ratio < 1.0) {
            problems.push(format!(
                "split_ratio {} is outside (0, 1)",
                self.split_ratio
            ));
        }
        if self.split_ratio_step.is_nan() || self.split_ratio_step <= 0.0 {
            problems.push(format!(
                "split_ratio_step {} must be positive",
                self.split_ratio_step
            ));
        }
    }

    fn check_gaps(&self, problems: &mut Vec<String>) {
        for (name, margins) in [
            ("margins", &self.margins),
            ("minimum_gaps", &self.minimum_gaps),
            ("maximum_gaps", &self.maximum_gaps),
        ] {
            for (side, value) in SIDES.iter().zip(margins.sides()) {
                if !value.is_finite() {
                    problems.push(format!("{name}.{side} is not a finite number ({value})"));
                } else if value < 0.0 {
                    problems.push(format!("{name}.{side} is negative ({value})"));
                }
            }
        }
        problems.extend(inverted_sides(&self.minimum_gaps, &self.maximum_gaps));
    }

    fn check_layouts(&self, problems: &mut Vec<String>) {
        if self.layouts.is_empty() {
            problems.push("No layouts configured, windows will not be arranged".to_owned());
        } else if let Err(err) = parse_layouts(&self.layouts) {
            problems.push(err.to_string());
        }
    }

    fn check_log_level(&self, problems: &mut Vec<String>) {
        if let Err(err) = EnvFilter::builder().parse(&self.log_level) {
            problems.push(format!("Log level is invalid: {err}"));
        }
    }
}

fn inverted_sides(min: &Margins, max: &Margins) -> Vec<String> {
    SIDES
        .iter()
        .zip(min.sides().into_iter().zip(max.sides()))
        .filter(|(_, (min, max))| min > max)
        .map(|(side, (min, max))| {
            format!("minimum_gaps.{side} ({min}) is larger than maximum_gaps.{side} ({max})")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_problems() {
        assert!(Config::default().problems().is_empty());
    }

    #[test]
    fn split_ratio_must_be_inside_the_unit_interval() {
        for ratio in [0.0, 1.0, -0.5, 2.0, f64::NAN] {
            let config = Config {
                split_ratio: ratio,
                ..Config::default()
            };
            assert_eq!(config.problems().len(), 1, "ratio {ratio}");
        }
        let config = Config {
            split_ratio_step: 0.0,
            ..Config::default()
        };
        assert_eq!(config.problems().len(), 1);
    }

    #[test]
    fn inverted_and_negative_gaps_are_reported() {
        let config = Config {
            minimum_gaps: Margins {
                top: 10.0,
                ..Margins::new(0.0)
            },
            maximum_gaps: Margins::new(5.0),
            margins: Margins {
                left: -1.0,
                ..Margins::new(0.0)
            },
            ..Config::default()
        };
        let problems = config.problems();
        assert_eq!(problems.len(), 2);
        assert!(problems.iter().any(|p| p.starts_with("margins.left")));
        assert!(problems.iter().any(|p| p.starts_with("minimum_gaps.top")));
    }

    #[test]
    fn non_finite_gaps_are_reported() {
        let config = Config {
            maximum_gaps: Margins {
                bottom: f32::INFINITY,
                ..Margins::new(0.0)
            },
            margins: Margins {
                top: f32::NAN,
                ..Margins::new(0.0)
            },
            ..Config::default()
        };
        let problems = config.problems();
        assert_eq!(problems.len(), 2, "{problems:?}");
        assert!(problems.iter().any(|p| p.starts_with("maximum_gaps.bottom is not a finite")));
        assert!(problems.iter().any(|p| p.starts_with("margins.top is not a finite")));
    }

    #[test]
    fn layouts_must_be_known_and_present() {
        let config = Config {
            layouts: vec![],
            ..Config::default()
        };
        assert_eq!(config.problems().len(), 1);

        let config = Config {
            layouts: vec!["spiral".to_owned(), "monocle".to_owned()],
            ..Config::default()
        };
        let problems = config.problems();
        assert_eq!(problems.len(), 1);
        assert!(problems[0].contains("monocle"));
    }

    #[test]
    fn log_level_must_parse() {
        let config = Config {
            log_level: "tessellate=loud".to_owned(),
            ..Config::default()
        };
        assert_eq!(config.problems().len(), 1);
    }
}
