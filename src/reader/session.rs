use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::ui;
use crate::cache::{CacheManager, CacheRequest};
use crate::display;
use crate::document::{Document, Library};
use crate::enrich::Orchestrator;
use crate::language::{language_name, validate_language};
use crate::ui::Spinner;

/// An interactive reading session over one library document.
///
/// Navigation and language changes persist to the library as they
/// happen, so a reopened document continues where it left off.
pub struct ReaderSession {
    library: Library,
    document_id: String,
    orchestrator: Orchestrator,
    cache: CacheManager,
    words_per_page: usize,
}

impl ReaderSession {
    pub fn new(
        library: Library,
        document_id: String,
        orchestrator: Orchestrator,
        cache: CacheManager,
        words_per_page: usize,
    ) -> Self {
        Self {
            library,
            document_id,
            orchestrator,
            cache,
            words_per_page,
        }
    }

    fn document(&self) -> Result<&Document> {
        self.library.find(&self.document_id)
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header(self.document()?);
        display::print_page(self.document()?);

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_help_message("Enter for next page, /help for commands, Ctrl+C to quit")
                .prompt();

            match input {
                Ok(line) => match parse_input(&line) {
                    Input::Empty => self.turn_forward()?,
                    Input::Command(cmd) => {
                        if !self.handle_command(cmd).await? {
                            break;
                        }
                    }
                    Input::Text(_) => {
                        ui::print_error("That is not a command. Try /help.");
                    }
                },
                Err(err) if crate::ui::is_prompt_cancelled(&err) => {
                    println!(); // Clear line before goodbye message
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        self.library.save()?;
        ui::print_goodbye();
        Ok(())
    }

    async fn handle_command(&mut self, cmd: SlashCommand) -> Result<bool> {
        match cmd {
            SlashCommand::Next => self.turn_forward()?,
            SlashCommand::Prev => self.turn_back()?,
            SlashCommand::Goto(None) => println!("Usage: /goto <page>"),
            SlashCommand::Goto(Some(number)) => self.go_to(number)?,
            SlashCommand::Lang(None) => self.show_language_usage()?,
            SlashCommand::Lang(Some(code)) => {
                // A failed translation leaves the document untouched.
                if let Err(err) = self.change_language(&code).await {
                    ui::print_error(&err.to_string());
                }
            }
            SlashCommand::Define(None) => println!("Usage: /define <word>"),
            SlashCommand::Define(Some(word)) => self.define(&word).await,
            SlashCommand::Search(None) => println!("Usage: /search <query>"),
            SlashCommand::Search(Some(query)) => self.search(&query).await,
            SlashCommand::Analyze => self.analyze().await?,
            SlashCommand::Info => display::print_document_info(self.document()?),
            SlashCommand::Help => ui::print_help(),
            SlashCommand::Quit => return Ok(false),
            SlashCommand::Unknown(cmd) => {
                ui::print_error(&format!("Unknown command: /{cmd}"));
            }
        }
        Ok(true)
    }

    fn turn_forward(&mut self) -> Result<()> {
        let document = self.library.find_mut(&self.document_id)?;
        if document.next_page() {
            self.library.save()?;
            display::print_page(self.document()?);
        } else {
            crate::info!("Already on the last page.");
        }
        Ok(())
    }

    fn turn_back(&mut self) -> Result<()> {
        let document = self.library.find_mut(&self.document_id)?;
        if document.prev_page() {
            self.library.save()?;
            display::print_page(self.document()?);
        } else {
            crate::info!("Already on the first page.");
        }
        Ok(())
    }

    /// Jumps to a one-based page number.
    fn go_to(&mut self, number: usize) -> Result<()> {
        let document = self.library.find_mut(&self.document_id)?;
        let page_count = document.page_count();
        if number >= 1 && document.go_to(number - 1) {
            self.library.save()?;
            display::print_page(self.document()?);
        } else {
            ui::print_error(&format!("Page {number} is out of range (1-{page_count})."));
        }
        Ok(())
    }

    fn show_language_usage(&self) -> Result<()> {
        let document = self.document()?;
        println!("Usage: /lang <code>");
        println!(
            "Currently reading in {}. Run 'folio languages' for the full list.",
            language_name(document.language()).unwrap_or(document.language())
        );
        Ok(())
    }

    /// Swaps the display text for a translation of the original, going
    /// through the cache first. Translating back to the source language
    /// restores the ingested text without a network call.
    async fn change_language(&mut self, target: &str) -> Result<()> {
        validate_language(target)?;

        let document = self.document()?;
        if target == document.language() {
            crate::info!("Already reading in {target}.");
            return Ok(());
        }

        if target == document.source_language {
            let words_per_page = self.words_per_page;
            let document = self.library.find_mut(&self.document_id)?;
            document.restore_original(words_per_page);
            self.library.save()?;
            crate::info!("Restored the original text.");
            display::print_page(self.document()?);
            return Ok(());
        }

        let source = document.source_language.clone();
        let text = document.original_content().to_string();

        let request = CacheRequest {
            text: &text,
            source: &source,
            target,
        };
        let translation = match self.cache.get(&request)? {
            Some(hit) => hit,
            None => {
                let spinner = Spinner::new("Translating...");
                let translation = self.orchestrator.translate(&text, &source, target).await?;
                spinner.stop();
                self.cache.put(&request, &translation)?;
                translation
            }
        };

        let words_per_page = self.words_per_page;
        let document = self.library.find_mut(&self.document_id)?;
        document.set_content(translation.text, target, words_per_page);
        self.library.save()?;
        crate::info!("Translated via {}.", translation.provider);
        display::print_page(self.document()?);
        Ok(())
    }

    async fn define(&self, word: &str) {
        let spinner = Spinner::new("Looking up...");
        let definition = self.orchestrator.define(word).await;
        spinner.stop();
        display::print_definition(&definition);
    }

    async fn search(&self, query: &str) {
        let spinner = Spinner::new("Searching...");
        let results = self.orchestrator.search(query).await;
        spinner.stop();
        display::print_search_results(&results);
    }

    async fn analyze(&self) -> Result<()> {
        let document = self.document()?;
        let title = document.title.clone();
        let content = document.original_content().to_string();

        let spinner = Spinner::new("Analyzing...");
        let analysis = self.orchestrator.analyze(&title, &content).await;
        spinner.stop();
        display::print_analysis(&analysis);
        Ok(())
    }
}
