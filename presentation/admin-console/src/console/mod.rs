pub mod command;
pub mod error_mapper;
pub mod form;
pub mod render;

use std::path::Path;
use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Lines};
use tokio::sync::watch;

use business::application::catalog::controller::CatalogController;
use business::domain::catalog::view::CatalogSnapshot;
use business::domain::product::draft::ProductDraft;
use business::domain::product::value_objects::ProductId;

use command::{Command, CommandError, FieldAssignment};
use error_mapper::IntoConsoleMessage;
use form::{apply_fields, load_image};
use render::{HELP, render_details, render_snapshot};

/// Line-oriented front end over the catalog controller.
pub struct Console<R, W> {
    controller: Arc<CatalogController>,
    updates: watch::Receiver<CatalogSnapshot>,
    input: Lines<R>,
    output: W,
}

impl Console<BufReader<tokio::io::Stdin>, tokio::io::Stdout> {
    pub fn stdio(controller: Arc<CatalogController>) -> Self {
        Self::new(
            controller,
            BufReader::new(tokio::io::stdin()),
            tokio::io::stdout(),
        )
    }
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(controller: Arc<CatalogController>, input: R, output: W) -> Self {
        let updates = controller.subscribe();
        Self {
            controller,
            updates,
            input: input.lines(),
            output,
        }
    }

    /// Loads the full list, then reads commands until `quit` or end of input.
    pub async fn run(mut self) -> std::io::Result<()> {
        self.say("Catalog admin console. Type 'help' for commands.")
            .await?;
        // Failures land in the view as an error message.
        let _ = self.controller.refresh().await;
        self.render_if_changed().await?;

        loop {
            self.prompt("> ").await?;
            let Some(line) = self.input.next_line().await? else {
                break;
            };

            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => self.execute(command).await?,
                Err(CommandError::Empty) => continue,
                Err(err) => self.say(&err.into_console_message()).await?,
            }
            self.render_if_changed().await?;
        }

        Ok(())
    }

    async fn execute(&mut self, command: Command) -> std::io::Result<()> {
        match command {
            Command::List => {
                let snapshot = self.updates.borrow_and_update().clone();
                self.say(&render_snapshot(&snapshot)).await
            }
            Command::Refresh => {
                let _ = self.controller.refresh().await;
                Ok(())
            }
            Command::Search(term) => {
                let _ = self.controller.search(&term).await;
                Ok(())
            }
            Command::Category(category) => {
                let _ = self
                    .controller
                    .filter_by_category(category.as_deref().unwrap_or_default())
                    .await;
                Ok(())
            }
            Command::Filter(text) => {
                self.controller.set_filter_text(&text).await;
                Ok(())
            }
            Command::Show(id) => self.show(id).await,
            Command::Delete(id) => self.delete(id).await,
            Command::Create(fields) => self.create(fields).await,
            Command::Edit(id, fields) => self.edit(id, fields).await,
            Command::Image(id, path) => self.save_image(id, &path).await,
            Command::Help => self.say(HELP).await,
            Command::Quit => Ok(()),
        }
    }

    async fn show(&mut self, id: ProductId) -> std::io::Result<()> {
        match self.controller.product(id).await {
            Ok(product) => {
                let image_url = product
                    .has_image()
                    .then(|| self.controller.image_url(Some(id)))
                    .flatten();
                self.say(&render_details(&product, image_url.as_deref()))
                    .await
            }
            Err(err) => self.say(&err.into_console_message()).await,
        }
    }

    async fn delete(&mut self, id: ProductId) -> std::io::Result<()> {
        self.prompt(&format!("Delete product #{}? [y/N] ", id))
            .await?;
        let answer = self.input.next_line().await?.unwrap_or_default();
        if !matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
            return self.say("Cancelled.").await;
        }

        match self.controller.delete(id).await {
            Ok(()) => self.say(&format!("Deleted product #{}.", id)).await,
            Err(err) => {
                let message = err.into_console_message();
                self.say(&format!("Could not delete product #{}: {}", id, message))
                    .await
            }
        }
    }

    async fn create(&mut self, fields: Vec<FieldAssignment>) -> std::io::Result<()> {
        let draft = match self.fill_draft(ProductDraft::default(), &fields).await {
            Ok(draft) => draft,
            Err(message) => return self.say(&message).await,
        };

        match self.controller.create(draft).await {
            Ok(product) => {
                self.say(&format!("Created product #{} {}.", product.id, product.name))
                    .await
            }
            Err(err) => {
                let message = err.into_console_message();
                self.say(&format!("Could not create product:\n{}", message))
                    .await
            }
        }
    }

    async fn edit(&mut self, id: ProductId, fields: Vec<FieldAssignment>) -> std::io::Result<()> {
        let current = match self.controller.product(id).await {
            Ok(product) => product,
            Err(err) => return self.say(&err.into_console_message()).await,
        };
        let draft = match self.fill_draft(ProductDraft::from(&current), &fields).await {
            Ok(draft) => draft,
            Err(message) => return self.say(&message).await,
        };

        match self.controller.update(id, draft).await {
            Ok(product) => self.say(&format!("Updated product #{}.", product.id)).await,
            Err(err) => {
                let message = err.into_console_message();
                self.say(&format!("Could not update product #{}:\n{}", id, message))
                    .await
            }
        }
    }

    async fn save_image(&mut self, id: ProductId, path: &Path) -> std::io::Result<()> {
        if !self.controller.has_image(id).await {
            return self.say(&format!("Product #{} has no image.", id)).await;
        }

        match self.controller.download_image(id).await {
            Ok(image) => match tokio::fs::write(path, image.bytes()).await {
                Ok(()) => {
                    self.say(&format!(
                        "Saved {} ({} bytes) to {}.",
                        image.content_type(),
                        image.len(),
                        path.display()
                    ))
                    .await
                }
                Err(err) => {
                    self.say(&format!("Could not save image to {}: {}", path.display(), err))
                        .await
                }
            },
            Err(err) => self.say(&err.into_console_message()).await,
        }
    }

    async fn fill_draft(
        &self,
        mut draft: ProductDraft,
        fields: &[FieldAssignment],
    ) -> Result<ProductDraft, String> {
        let image_path = apply_fields(&mut draft, fields).map_err(|e| e.into_console_message())?;
        if let Some(path) = image_path {
            draft.image = Some(load_image(&path).await.map_err(|e| e.into_console_message())?);
        }
        Ok(draft)
    }

    async fn render_if_changed(&mut self) -> std::io::Result<()> {
        if !self.updates.has_changed().unwrap_or(false) {
            return Ok(());
        }
        let snapshot = self.updates.borrow_and_update().clone();
        self.say(&render_snapshot(&snapshot)).await
    }

    async fn prompt(&mut self, text: &str) -> std::io::Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await
    }

    async fn say(&mut self, text: &str) -> std::io::Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        self.output.flush().await
    }
}
