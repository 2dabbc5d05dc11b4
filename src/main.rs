use anyhow::Result;
use log::info;
use tokio::io::{AsyncBufReadExt, BufReader};

use lastcall::api::CocktailDbClient;
use lastcall::commands::{parse_command, Command, HELP_TEXT};
use lastcall::config::AppConfig;
use lastcall::search::find_cocktails;
use lastcall::session::Session;
use lastcall::ui;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let config = AppConfig::from_env();
    info!("Starting Last Call against {}", config.base_url);

    let client = CocktailDbClient::new(config.base_url);

    // Fetch the ingredient catalog once at startup. An empty catalog only
    // disables suggestions; free-text entry and search keep working.
    let catalog = client.list_ingredients().await;
    if catalog.is_empty() {
        println!("Ingredient catalog unavailable; autocomplete is off.");
    }
    let mut session = Session::new(catalog);

    println!("Last Call - find cocktails with what you have. Type `help` for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print_prompt();
        let Some(line) = lines.next_line().await? else {
            break; // EOF
        };
        let Some(command) = parse_command(&line) else {
            continue;
        };

        match command {
            Command::Add(name) => {
                if session.add_ingredient(&name) {
                    println!("{}", ui::format_selection(session.selected()));
                } else {
                    println!("'{}' is already in your pantry.", name.trim());
                }
            }
            Command::Remove(name) => {
                if session.remove_ingredient(&name) {
                    println!("{}", ui::format_selection(session.selected()));
                } else {
                    println!("'{}' is not in your pantry.", name.trim());
                }
            }
            Command::List => println!("{}", ui::format_selection(session.selected())),
            Command::Suggest(prefix) => {
                let suggestions = session.suggestions(&prefix);
                println!("{}", ui::format_suggestions(&suggestions));
            }
            Command::Find => {
                if !session.search_started() {
                    println!("Please select at least one ingredient first.");
                    continue;
                }
                println!("Finding cocktails...");
                match find_cocktails(&client, session.selected()).await {
                    Ok(results) => {
                        session.search_succeeded(results);
                        println!("{}", ui::format_results(session.results()));
                        if !session.results().is_empty() {
                            println!("Use `show <n>` for the full recipe.");
                        }
                    }
                    Err(e) => {
                        let message = e.to_string();
                        session.search_failed(message.clone());
                        println!("{message}");
                    }
                }
            }
            Command::Show(n) => match session.results().get(n - 1) {
                Some(recipe) => println!("{}", ui::format_detail(recipe)),
                None => println!("No result #{n}. Run `find` and check the list."),
            },
            Command::Clear => {
                session.clear_results();
                println!("Results cleared.");
            }
            Command::Help => println!("{HELP_TEXT}"),
            Command::Quit => break,
            Command::Unknown(message) => println!("{message}"),
        }
    }

    Ok(())
}

fn print_prompt() {
    use std::io::Write;
    print!("> ");
    let _ = std::io::stdout().flush();
}
