use anyhow::{anyhow, Result};
use crossterm::style::Stylize;
use reedline::{
    DefaultHinter, FileBackedHistory, Prompt, PromptEditMode, PromptHistorySearch,
    PromptHistorySearchStatus, Reedline, Signal,
};
use std::borrow::Cow;
use std::cell::RefCell;
use std::rc::Rc;

mod table_display;

use sticky_grid::config::config::Config;
use sticky_grid::data::sample_data::users_table;
use sticky_grid::grid_state_container::GridStateContainer;
use sticky_grid::state::dispatcher::{LayoutSubscriber, StateDispatcher};
use sticky_grid::state::events::{GridEvent, RowAction, RowRef};
use sticky_grid::ui::layout_sequencer::TableLayout;
use sticky_grid::utils::app_paths::AppPaths;
use sticky_grid::utils::logging::init_tracing;
use table_display::display_layout;

struct GridPrompt {
    page: usize,
    total_pages: usize,
}

impl Prompt for GridPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        Cow::Owned(format!("grid [{}/{}]", self.page, self.total_pages))
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, _edit_mode: PromptEditMode) -> Cow<'_, str> {
        Cow::Borrowed("> ")
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed("... ")
    }

    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };
        Cow::Owned(format!(
            "({}reverse search: {})",
            prefix, history_search.term
        ))
    }
}

/// Prints the layout every time an intent is applied
struct TerminalRenderer {
    config: Config,
}

impl LayoutSubscriber for TerminalRenderer {
    fn on_layout_changed(&mut self, event: &GridEvent, layout: &TableLayout) {
        if matches!(event, GridEvent::Export { .. }) {
            return;
        }
        display_layout(layout, &self.config.display.icons);
    }

    fn name(&self) -> &str {
        "TerminalRenderer"
    }
}

fn print_help() {
    println!("{}", "Sticky Grid - frozen columns, frozen and pinned rows".blue().bold());
    println!();
    println!("{}", "Usage:".yellow());
    println!("  sticky-grid [--generate-config]");
    println!();
    println!("{}", "Commands:".yellow());
    println!("  {} - Toggle frozen columns up to N", "freeze-col N".green());
    println!("  {}     - Toggle frozen row (global index)", "freeze N".green());
    println!("  {}        - Toggle pinned row (global index)", "pin N".green());
    println!("  {}      - Unpin row (global index)", "unpin N".green());
    println!(
        "  {} - Row menu action on the current page",
        "row N freeze|pin|unpin".green()
    );
    println!("  {}       - Go to page N", "page N".green());
    println!("  {}    - Next / previous page", "next, prev".green());
    println!("  {} - Rename column N", "rename N LABEL".green());
    println!("  {}   - Export table (CSV, SQL)", "export FMT".green());
    println!("  {}         - Print the layout as JSON", "json".green());
    println!("  {}         - Show recent log entries", "logs".green());
    println!("  {}         - Show this help", "help".green());
    println!("  {}         - Exit", "quit".green());
    println!();
}

fn parse_index(arg: Option<&str>) -> Result<usize> {
    let arg = arg.ok_or_else(|| anyhow!("Missing index"))?;
    arg.parse::<usize>()
        .map_err(|_| anyhow!("'{}' is not a valid index", arg))
}

/// Turn a REPL line into a grid intent. `Ok(None)` for commands handled
/// outside the grid.
fn parse_command(line: &str) -> Result<Option<GridEvent>> {
    let mut parts = line.split_whitespace();
    let command = parts.next().unwrap_or_default();

    let event = match command {
        "freeze-col" => GridEvent::ToggleColumnFreeze(parse_index(parts.next())?),
        "freeze" => GridEvent::ToggleRowFreeze(parse_index(parts.next())?),
        "pin" => GridEvent::ToggleRowPin(parse_index(parts.next())?),
        "unpin" => GridEvent::UnpinRow(parse_index(parts.next())?),
        "row" => {
            let local = parse_index(parts.next())?;
            let action = parts
                .next()
                .ok_or_else(|| anyhow!("Usage: row N freeze|pin|unpin"))?;
            GridEvent::RowAction {
                row: RowRef::PageLocal(local),
                action: RowAction::parse(action),
            }
        }
        "page" => GridEvent::SetPage(parse_index(parts.next())?),
        "next" => GridEvent::NextPage,
        "prev" => GridEvent::PrevPage,
        "rename" => {
            let index = parse_index(parts.next())?;
            let label = parts.collect::<Vec<_>>().join(" ");
            GridEvent::RenameColumn { index, label }
        }
        "export" => GridEvent::Export {
            format: parts.next().unwrap_or_default().to_string(),
        },
        _ => return Ok(None),
    };
    Ok(Some(event))
}

fn generate_config() -> Result<()> {
    let path = Config::get_config_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, Config::create_default_with_comments())?;
    println!("Configuration file created at: {:?}", path);
    Ok(())
}

fn main() -> Result<()> {
    let log_buffer = init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--generate-config") {
        return generate_config();
    }

    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("{}", format!("Using default config: {}", e).yellow());
        Config::default()
    });

    let grid = Rc::new(RefCell::new(GridStateContainer::from_config(
        users_table()?,
        &config,
    )));
    let mut dispatcher = StateDispatcher::new();
    dispatcher.set_grid(&grid);
    dispatcher.subscribe(Box::new(TerminalRenderer {
        config: config.clone(),
    }));

    print_help();
    display_layout(grid.borrow().layout(), &config.display.icons);

    let mut line_editor = Reedline::create().with_hinter(Box::new(DefaultHinter::default()));
    if let Ok(history_file) = AppPaths::history_file() {
        if let Ok(history) = FileBackedHistory::with_file(100, history_file) {
            line_editor = line_editor.with_history(Box::new(history));
        }
    }

    loop {
        let prompt = {
            let grid = grid.borrow();
            GridPrompt {
                page: grid.current_page(),
                total_pages: grid.total_pages(),
            }
        };

        let sig = line_editor.read_line(&prompt)?;
        match sig {
            Signal::Success(buffer) => {
                let trimmed = buffer.trim();
                match trimmed {
                    "" => continue,
                    "help" => {
                        print_help();
                        continue;
                    }
                    "quit" | "exit" => break,
                    "json" => {
                        println!("{}", serde_json::to_string_pretty(grid.borrow().layout())?);
                        continue;
                    }
                    "logs" => {
                        for entry in log_buffer.get_recent(20) {
                            println!("{}", entry.format_for_display().dark_grey());
                        }
                        continue;
                    }
                    _ => {}
                }

                match parse_command(trimmed) {
                    Ok(Some(event)) => match dispatcher.dispatch(event) {
                        Ok(false) => println!("{}", "No change.".yellow()),
                        Ok(true) => {}
                        Err(e) => eprintln!("{}", format!("Error: {}", e).red()),
                    },
                    Ok(None) => {
                        eprintln!("{}", format!("Unknown command: {}", trimmed).red())
                    }
                    Err(e) => eprintln!("{}", format!("Error: {}", e).red()),
                }
            }
            Signal::CtrlD | Signal::CtrlC => {
                println!("\nGoodbye!");
                break;
            }
        }
    }

    Ok(())
}
