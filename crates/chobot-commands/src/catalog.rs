//! Command descriptors.
//!
//! Names, descriptions and option schemas of every slash command live here as
//! plain records. Poise builds the commands from the handler functions; the
//! framework then applies these records on top, and `/comandos` lists them.

/// Schema of a single command option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSpec {
    /// Option name as typed by users.
    pub name: &'static str,
    /// User-facing description.
    pub description: &'static str,
    /// Whether Discord requires the option.
    pub required: bool,
    /// Smallest accepted integer, enforced by Discord's client.
    pub min_value: Option<i64>,
}

/// Descriptor of a slash command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    /// Command name, without the leading slash.
    pub name: &'static str,
    /// User-facing description.
    pub description: &'static str,
    /// Options, in declaration order.
    pub options: &'static [OptionSpec],
}

impl CommandSpec {
    /// The command as users type it, e.g. `/rolar`.
    pub fn invocation(&self) -> String {
        format!("/{}", self.name)
    }
}

/// Every command the bot registers, in listing order.
pub const CATALOG: &[CommandSpec] = &[
    CommandSpec {
        name: "comandos",
        description: "Exibe lista de comandos do bot",
        options: &[],
    },
    CommandSpec {
        name: "convite",
        description: "Envia um link com convite para o servidor",
        options: &[],
    },
    CommandSpec {
        name: "rolar",
        description: "Rola um dado com valor escolhido",
        options: &[OptionSpec {
            name: "d",
            description: "Valor do dado",
            required: true,
            min_value: Some(2),
        }],
    },
];

/// Looks up a descriptor by command name.
pub fn find(name: &str) -> Option<&'static CommandSpec> {
    CATALOG.iter().find(|spec| spec.name == name)
}

/// Copies the descriptor's descriptions onto a poise command.
///
/// Returns `false` when the command has no descriptor.
pub fn apply<U, E>(command: &mut poise::Command<U, E>) -> bool {
    let Some(spec) = find(&command.name) else {
        return false;
    };

    command.description = Some(spec.description.to_string());
    for parameter in &mut command.parameters {
        if let Some(option) = spec.options.iter().find(|o| o.name == parameter.name) {
            parameter.description = Some(option.description.to_string());
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_names_are_unique() {
        for (i, spec) in CATALOG.iter().enumerate() {
            assert!(
                CATALOG[i + 1..].iter().all(|other| other.name != spec.name),
                "duplicate command {}",
                spec.name
            );
        }
    }

    #[test]
    fn test_find() {
        assert_eq!(find("rolar").map(|s| s.options.len()), Some(1));
        assert!(find("roll").is_none());
    }

    #[test]
    fn test_die_option_matches_dice_minimum() {
        let option = find("rolar").unwrap().options[0];
        assert!(option.required);
        assert_eq!(option.min_value, i64::try_from(chobot_dice::MIN_DIE_SIZE).ok());
    }

    #[test]
    fn test_invocation() {
        assert_eq!(CATALOG[0].invocation(), "/comandos");
    }
}
