use std::fmt::Write as _;

use crate::{COMMANDS, CommandMeta, CommandOutput};

pub const META: CommandMeta = CommandMeta {
    name: "help",
    desc: "Lists out all available commands.",
    category: "utility",
    usage: "/help [category]",
};

pub fn help(query: &str) -> CommandOutput {
    let category = Some(query.trim()).filter(|raw| !raw.is_empty());

    let mut categories: Vec<&str> = COMMANDS.iter().map(|c| c.category).collect();
    categories.sort_unstable();
    categories.dedup();

    if let Some(wanted) = category
        && !categories.contains(&wanted)
    {
        return CommandOutput::Text(format!(
            "Unknown category `{}`. Available: {}",
            wanted,
            categories.join(", ")
        ));
    }

    CommandOutput::Text(grouped_help(&sorted_commands(category)))
}

fn sorted_commands(category: Option<&str>) -> Vec<&'static CommandMeta> {
    let mut filtered: Vec<&'static CommandMeta> = COMMANDS
        .iter()
        .filter(|cmd| match category {
            Some(wanted) => cmd.category == wanted,
            None => true,
        })
        .collect();

    filtered.sort_unstable_by(|left, right| {
        left.category
            .cmp(right.category)
            .then_with(|| left.name.cmp(right.name))
    });

    filtered
}

fn grouped_help(commands: &[&CommandMeta]) -> String {
    let mut out = String::new();
    let mut current_category = "";

    for command in commands {
        if command.category != current_category {
            if !out.is_empty() {
                out.push('\n');
            }
            let _ = writeln!(out, "{}:", command.category);
            current_category = command.category;
        }
        let _ = writeln!(out, "  {:<18} {}", command.usage, command.desc);
    }

    out.trim_end().to_owned()
}

#[cfg(test)]
mod tests {
    use super::help;
    use crate::CommandOutput;

    fn text(output: CommandOutput) -> String {
        match output {
            CommandOutput::Text(text) => text,
            CommandOutput::Quit => panic!("help never quits"),
        }
    }

    #[test]
    fn lists_every_category() {
        let out = text(help(""));
        assert!(out.starts_with("session:"));
        assert!(out.contains("\nutility:"));
        assert!(out.contains("/history"));
        assert!(out.contains("/quit"));
    }

    #[test]
    fn filters_by_category() {
        let out = text(help("utility"));
        assert!(out.contains("/help"));
        assert!(!out.contains("/render"));
    }

    #[test]
    fn rejects_unknown_category() {
        let out = text(help("games"));
        assert_eq!(out, "Unknown category `games`. Available: session, utility");
    }
}
