// src/bin/shop_picker.rs
// Terminal front end: search a city, tick shops, export data.csv
use anyhow::{Context, Result};
use dotenv::dotenv;
use shop_leads::client::{SearchView, ShopsClient};
use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;

// --- ANSI colours ---
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";
const DIM: &str = "\x1b[2m";

/// One line of user input
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Search(String),
    Toggle(usize),
    Export,
    Help,
    Quit,
    Unknown(String),
}

fn parse_command(line: &str) -> Command {
    let line = line.trim();
    if let Some(rest) = line.strip_prefix("s ") {
        return Command::Search(rest.to_string());
    }
    match line {
        "s" => Command::Search(String::new()),
        "e" => Command::Export,
        "h" | "?" => Command::Help,
        "q" => Command::Quit,
        other => match other.parse::<usize>() {
            Ok(n) if n > 0 => Command::Toggle(n),
            _ => Command::Unknown(other.to_string()),
        },
    }
}

struct Picker {
    client: ShopsClient,
    view: SearchView,
}

impl Picker {
    fn new(base_url: &str) -> Self {
        Self {
            client: ShopsClient::new(base_url),
            view: SearchView::new(),
        }
    }

    async fn search(&mut self, city: &str) {
        self.view.set_city_input(city);

        let city = match self.view.begin_search() {
            Ok(city) => city,
            Err(e) => {
                println!("{}⚠️  {}{}", YELLOW, e, RESET);
                return;
            }
        };
        if self.view.is_loading() {
            println!("{}Searching...{}", CYAN, RESET);
        }

        let result = self.client.fetch_shops(&city).await;
        match self.view.finish_search(result) {
            Ok(count) => {
                println!("{}✅ {} shops with a phone number{}", GREEN, count, RESET);
                self.render();
            }
            Err(_) => self.render(),
        }
    }

    fn toggle(&mut self, number: usize) {
        let id = match self.view.shops().get(number - 1) {
            Some(entry) => entry.shop.id.clone(),
            None => {
                println!("{}No shop number {}{}", YELLOW, number, RESET);
                return;
            }
        };
        self.view.toggle(&id);
        self.render();
    }

    fn export(&self) -> Result<()> {
        let export = self.view.export().context("building CSV export")?;
        let path = export
            .write_to(Path::new("."))
            .with_context(|| format!("writing {}", export.file_name))?;
        println!(
            "{}💾 Saved {} selected shops to {}{}",
            GREEN,
            self.view.selected_count(),
            path.display(),
            RESET
        );
        Ok(())
    }

    fn render(&self) {
        if let Some(error) = self.view.error() {
            println!("{}❌ {}{}", RED, error, RESET);
        }

        let shops = self.view.shops();
        if shops.is_empty() {
            return;
        }

        println!("\n{}Select Shops{} ({} of {} selected)", BOLD, RESET, self.view.selected_count(), shops.len());
        println!("──────────────────────────────────────────────────────────────");
        for (idx, entry) in shops.iter().enumerate() {
            let mark = if entry.selected { "[x]" } else { "[ ]" };
            println!(
                "{:>3}. {} {:<40} {}{}{}",
                idx + 1,
                mark,
                entry.shop.name(),
                DIM,
                entry.shop.phone().unwrap_or_default(),
                RESET
            );
        }
        println!("──────────────────────────────────────────────────────────────");
    }
}

fn print_help() {
    println!("{}Commands:{}", BOLD, RESET);
    println!("  s <city>   search shops in a city");
    println!("  <n>        toggle shop number n");
    println!("  e          export selected shops to data.csv");
    println!("  q          quit");
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let base_url = env::var("SHOPS_API_URL").unwrap_or_else(|_| "http://127.0.0.1:3000".to_string());
    let mut picker = Picker::new(&base_url);

    println!("{}Bliss-Wear WhatsApp Promotion Tool{}", BOLD, RESET);
    if !picker.client.is_healthy().await {
        println!("{}❌ Service unavailable at {}{}", RED, base_url, RESET);
        println!("{}Please ensure shop-leads is running (cargo run --bin shop-leads){}", YELLOW, RESET);
        std::process::exit(1);
    }

    let initial_city = env::args().skip(1).collect::<Vec<_>>().join(" ");
    if !initial_city.is_empty() {
        picker.search(&initial_city).await;
    }
    print_help();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        match parse_command(&line?) {
            Command::Search(city) => picker.search(&city).await,
            Command::Toggle(n) => picker.toggle(n),
            Command::Export => {
                if let Err(e) = picker.export() {
                    println!("{}❌ Export failed: {:#}{}", RED, e, RESET);
                }
            }
            Command::Help => print_help(),
            Command::Quit => break,
            Command::Unknown(input) if input.is_empty() => {}
            Command::Unknown(input) => println!("{}Unknown command: {}{}", YELLOW, input, RESET),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("s New Delhi"), Command::Search("New Delhi".to_string()));
        assert_eq!(parse_command("s"), Command::Search(String::new()));
        assert_eq!(parse_command(" 3 "), Command::Toggle(3));
        assert_eq!(parse_command("e"), Command::Export);
        assert_eq!(parse_command("q"), Command::Quit);
        assert_eq!(parse_command("0"), Command::Unknown("0".to_string()));
        assert_eq!(parse_command("x"), Command::Unknown("x".to_string()));
    }

    #[tokio::test]
    async fn test_blank_search_never_starts_loading() {
        // Nothing listens here, so a real fetch would leave an error behind
        let mut picker = Picker::new("http://127.0.0.1:9");
        picker.search("   ").await;

        assert!(!picker.view.is_loading());
        assert!(picker.view.error().is_none());
        assert!(picker.view.shops().is_empty());
    }

    #[tokio::test]
    async fn test_failed_search_keeps_session_usable() {
        let mut picker = Picker::new("http://127.0.0.1:9");
        picker.search("Surat").await;

        assert!(!picker.view.is_loading());
        assert!(picker.view.error().is_some());
    }
}
