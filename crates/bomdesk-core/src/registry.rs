//! Command Registry
//!
//! The menu is two levels deep: an `Action` at the top, then a `Selection`
//! naming the concrete (action, target) pair. Each selection knows how to
//! prompt for its own raw arguments. Options are picked by 1-based
//! position; invalid input is re-prompted until it is valid and never
//! reaches the caller as an error.

use crate::errors::{BomError, Result};
use crate::model::{Table, UpdateField};
use crate::presentation::{PromptError, PromptResult, Prompter};

/// Label used when reading a menu choice
pub const CHOICE_LABEL: &str = "Input option number: ";
/// Notice shown after an invalid menu choice
pub const RETRY_NOTICE: &str = "There is no such option, try again";

/// Top-level action family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Create,
    Read,
    Update,
    Delete,
    Generate,
    Search,
    Quit,
}

/// Bulk random-data generators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Generator {
    Products,
    Materials,
    Consumptions,
}

/// One (action, target) pair; the Orchestrator matches on this exhaustively
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selection {
    Create(Table),
    Read(Table),
    Update(Table),
    Delete(Table),
    Generate(Generator),
    Search(Table),
}

const CREATE_TARGETS: [Selection; 3] = [
    Selection::Create(Table::Product),
    Selection::Create(Table::Material),
    Selection::Create(Table::Consumption),
];
const READ_TARGETS: [Selection; 3] = [
    Selection::Read(Table::Product),
    Selection::Read(Table::Material),
    Selection::Read(Table::Consumption),
];
const UPDATE_TARGETS: [Selection; 3] = [
    Selection::Update(Table::Product),
    Selection::Update(Table::Material),
    Selection::Update(Table::Consumption),
];
const DELETE_TARGETS: [Selection; 3] = [
    Selection::Delete(Table::Product),
    Selection::Delete(Table::Material),
    Selection::Delete(Table::Consumption),
];
const GENERATE_TARGETS: [Selection; 3] = [
    Selection::Generate(Generator::Products),
    Selection::Generate(Generator::Materials),
    Selection::Generate(Generator::Consumptions),
];
const SEARCH_TARGETS: [Selection; 3] = [
    Selection::Search(Table::Product),
    Selection::Search(Table::Material),
    Selection::Search(Table::Consumption),
];

impl Action {
    /// Top-level menu order
    pub const MENU: [Action; 7] = [
        Action::Create,
        Action::Read,
        Action::Update,
        Action::Delete,
        Action::Generate,
        Action::Search,
        Action::Quit,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::Read => "read",
            Action::Update => "update",
            Action::Delete => "delete",
            Action::Generate => "generate",
            Action::Search => "search",
            Action::Quit => "quit",
        }
    }

    /// Title of this action's sub-menu
    pub fn title(&self) -> &'static str {
        match self {
            Action::Create => "Choose what to create",
            Action::Read => "Choose what to read",
            Action::Update => "Choose what to update",
            Action::Delete => "Choose what to delete",
            Action::Generate => "Choose what to generate",
            Action::Search => "Choose search query",
            Action::Quit => "Quit",
        }
    }

    /// Ordered targets of this action; empty for `Quit`
    pub fn targets(&self) -> &'static [Selection] {
        match self {
            Action::Create => &CREATE_TARGETS,
            Action::Read => &READ_TARGETS,
            Action::Update => &UPDATE_TARGETS,
            Action::Delete => &DELETE_TARGETS,
            Action::Generate => &GENERATE_TARGETS,
            Action::Search => &SEARCH_TARGETS,
            Action::Quit => &[],
        }
    }
}

impl Generator {
    pub fn key(&self) -> &'static str {
        match self {
            Generator::Products => "generate_products",
            Generator::Materials => "generate_materials",
            Generator::Consumptions => "generate_consumptions",
        }
    }

    /// Table the generator inserts into
    pub fn table(&self) -> Table {
        match self {
            Generator::Products => Table::Product,
            Generator::Materials => Table::Material,
            Generator::Consumptions => Table::Consumption,
        }
    }
}

impl Selection {
    pub fn action(&self) -> Action {
        match self {
            Selection::Create(_) => Action::Create,
            Selection::Read(_) => Action::Read,
            Selection::Update(_) => Action::Update,
            Selection::Delete(_) => Action::Delete,
            Selection::Generate(_) => Action::Generate,
            Selection::Search(_) => Action::Search,
        }
    }

    /// Sub-menu key
    pub fn key(&self) -> &'static str {
        match self {
            Selection::Create(table)
            | Selection::Read(table)
            | Selection::Update(table)
            | Selection::Delete(table) => table.key(),
            Selection::Generate(generator) => generator.key(),
            Selection::Search(Table::Product) => "search_products",
            Selection::Search(Table::Material) => "search_materials",
            Selection::Search(Table::Consumption) => "search_consumptions",
        }
    }

    /// Table the operation reads or writes
    pub fn table(&self) -> Table {
        match *self {
            Selection::Create(table)
            | Selection::Read(table)
            | Selection::Update(table)
            | Selection::Delete(table)
            | Selection::Search(table) => table,
            Selection::Generate(generator) => generator.table(),
        }
    }

    /// Operation name used in log events, e.g. `update_material`
    pub fn op_name(&self) -> String {
        match self {
            Selection::Generate(_) | Selection::Search(_) => self.key().to_string(),
            _ => format!("{}_{}", self.action().key(), self.key()),
        }
    }

    /// Prompt for the raw arguments of this operation
    ///
    /// Update prompts pick the field from the table's allow-list by
    /// position, so the returned field name is always allow-listed.
    pub fn prompt_args(&self, prompter: &mut dyn Prompter) -> PromptResult<RawArgs> {
        let mut args = Vec::new();
        match *self {
            Selection::Create(Table::Product) => {
                args.push(prompter.read_line("Enter product name: ")?);
                args.push(prompter.read_line("Enter description: ")?);
            }
            Selection::Create(Table::Material) => {
                args.push(prompter.read_line("Enter material name: ")?);
                args.push(prompter.read_line("Enter price per unit: ")?);
                args.push(prompter.read_line("Enter unit: ")?);
            }
            Selection::Create(Table::Consumption) => {
                args.push(prompter.read_line("Enter product ID: ")?);
                args.push(prompter.read_line("Enter material ID: ")?);
                args.push(prompter.read_line("Enter quantity used: ")?);
            }
            Selection::Read(_) => {}
            Selection::Update(table) => {
                args.push(prompter.read_line(&format!("Enter {} ID: ", table.key()))?);
                let fields = UpdateField::allowed(table);
                let labels: Vec<String> = fields
                    .iter()
                    .map(|field| format!("change_{}", field.name()))
                    .collect();
                let labels: Vec<&str> = labels.iter().map(String::as_str).collect();
                let index = choose(prompter, "Choose field to update", 2, &labels)?;
                args.push(fields[index].name().to_string());
                args.push(prompter.read_line("Enter new value: ")?);
            }
            Selection::Delete(table) => {
                args.push(prompter.read_line(&format!("Enter {} ID: ", table.key()))?);
            }
            Selection::Generate(_) => {
                args.push(prompter.read_line("Enter number to generate: ")?);
            }
            Selection::Search(Table::Product) => {
                args.push(prompter.read_line("Enter product name fragment (empty for all): ")?);
            }
            Selection::Search(Table::Material) => {
                args.push(prompter.read_line("Enter material name fragment (empty for all): ")?);
                args.push(prompter.read_line("Enter min price (empty for none): ")?);
                args.push(prompter.read_line("Enter max price (empty for none): ")?);
            }
            Selection::Search(Table::Consumption) => {
                args.push(prompter.read_line("Enter product name fragment (empty for all): ")?);
                args.push(prompter.read_line("Enter material name fragment (empty for all): ")?);
                args.push(prompter.read_line("Enter min quantity (empty for none): ")?);
                args.push(prompter.read_line("Enter max quantity (empty for none): ")?);
            }
        }
        Ok(RawArgs::new(args))
    }
}

/// Raw, uncoerced operator input for one operation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawArgs(Vec<String>);

impl RawArgs {
    pub fn new(values: Vec<String>) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[String] {
        &self.0
    }

    /// Borrow exactly `N` values
    ///
    /// # Errors
    ///
    /// `BomError::ArgumentCount` when the prompt produced a different count.
    pub fn take<const N: usize>(&self) -> Result<[&str; N]> {
        if self.0.len() != N {
            return Err(BomError::ArgumentCount {
                expected: N,
                actual: self.0.len(),
            });
        }
        Ok(std::array::from_fn(|i| self.0[i].as_str()))
    }
}

impl<S: Into<String>> FromIterator<S> for RawArgs {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Parse a 1-based menu choice into a 0-based index
pub fn parse_choice(input: &str, len: usize) -> Option<usize> {
    let n: usize = input.trim().parse().ok()?;
    (1..=len).contains(&n).then(|| n - 1)
}

/// Show `options` and read choices until one is valid
///
/// Returns the 0-based index of the chosen option. Only presentation
/// failures (closed input, I/O) escape this loop.
pub fn choose(
    prompter: &mut dyn Prompter,
    title: &str,
    depth: usize,
    options: &[&str],
) -> PromptResult<usize> {
    if options.is_empty() {
        return Err(PromptError::NoOptions);
    }
    prompter.show_options(title, depth, options)?;
    loop {
        let line = prompter.read_line(CHOICE_LABEL)?;
        match parse_choice(&line, options.len()) {
            Some(index) => return Ok(index),
            None => prompter.show_notice(RETRY_NOTICE)?,
        }
    }
}

/// Top-level menu
pub fn select_action(prompter: &mut dyn Prompter) -> PromptResult<Action> {
    let keys: Vec<&str> = Action::MENU.iter().map(Action::key).collect();
    let index = choose(prompter, "Select action", 0, &keys)?;
    Ok(Action::MENU[index])
}

/// Sub-menu of `action`
pub fn select_target(prompter: &mut dyn Prompter, action: Action) -> PromptResult<Selection> {
    let targets = action.targets();
    let keys: Vec<&str> = targets.iter().map(Selection::key).collect();
    let index = choose(prompter, action.title(), 1, &keys)?;
    Ok(targets[index])
}
