use course_catalog::catalog::CatalogStore;
use course_catalog::selection::SelectionController;
use course_catalog::types::CourseId;

pub const HELP: &str = "commands: toggle <ID> | filter on|off | list | reload | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Toggle(CourseId),
    Filter(bool),
    List,
    Reload,
    Quit,
    Empty,
    Unknown(String),
}

pub fn parse(line: &str) -> Command {
    let mut parts = line.split_whitespace();
    let Some(verb) = parts.next() else {
        return Command::Empty;
    };
    let arg = parts.next();

    match (verb.to_ascii_lowercase().as_str(), arg) {
        ("toggle" | "t", Some(id)) => Command::Toggle(CourseId::new(id)),
        ("filter" | "f", Some(flag)) => match flag.to_ascii_lowercase().as_str() {
            "on" | "true" | "1" => Command::Filter(true),
            "off" | "false" | "0" => Command::Filter(false),
            _ => Command::Unknown(line.trim().to_string()),
        },
        ("list" | "l", None) => Command::List,
        ("reload", None) => Command::Reload,
        ("quit" | "q" | "exit", None) => Command::Quit,
        _ => Command::Unknown(line.trim().to_string()),
    }
}

/// Select each of `ids` that names a catalog course. Repeated ids stay
/// selected. Returns the ids the catalog does not know.
pub fn preselect(
    store: &CatalogStore,
    controller: &mut SelectionController,
    ids: Vec<String>,
) -> Vec<String> {
    let mut unknown = Vec::new();
    for id in ids {
        if !store.contains(&id) {
            unknown.push(id);
        } else if !controller.is_selected(&id) {
            controller.toggle_selection(id);
        }
    }
    unknown
}
