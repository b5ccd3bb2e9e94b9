use super::App;
use crate::input::Mode;

impl App {
    /// The file explorer: one row per document, active one marked.
    pub fn view_files(&self) -> String {
        let files = self.session.files();
        if files.is_empty() {
            return "Files: (none) | :new to create one".to_string();
        }

        let active = files.active_id();
        let mut out = String::from("Files:");
        for doc in files.documents() {
            let marker = if Some(doc.id()) == active { '*' } else { ' ' };
            out.push_str(&format!(
                "\n {marker} {:<24} {}",
                doc.name(),
                doc.language().display_name()
            ));
        }
        out.push_str(&format!(
            "\nNew files: {} | Preview: {}",
            self.session.selected_language().display_name(),
            if self.session.preview_visible() { "shown" } else { "hidden" }
        ));
        out
    }

    /// The editor pane for the active document, with line numbers.
    pub fn view_editor(&self) -> String {
        let Some(view) = self.session.editor_view() else {
            return "No file is open".to_string();
        };

        let mut out = format!(
            "── {} [{}, {}] ──",
            view.name,
            view.language.id(),
            view.theme
        );
        let width = view.text.lines().count().max(1).to_string().len();
        for (number, line) in view.text.lines().enumerate() {
            out.push_str(&format!("\n{:>width$} │ {line}", number + 1));
        }
        out
    }

    /// The options the editor pane was mounted with.
    pub fn view_editor_options(&self) -> String {
        let options = self.session.editor_options();
        let on_off = |flag: bool| if flag { "on" } else { "off" };
        format!(
            "Editor: {} {}pt, line height {}, minimap {}, word wrap {}, cursor {}",
            options.font_family,
            options.font_size,
            options.line_height,
            on_off(options.minimap),
            on_off(options.word_wrap),
            options.cursor_blinking.as_str()
        )
    }

    /// The prompt for the current mode.
    pub fn view_prompt(&self) -> String {
        match &self.mode {
            Mode::Normal => format!("{} ", self.session.terminal().prompt()),
            Mode::Rename { current } => format!("Enter new file name [{current}]: "),
            Mode::ConfirmDelete { name } => {
                format!("Are you sure you want to delete {name}? [y/N] ")
            }
            Mode::Capture => "... ".to_string(),
        }
    }

    pub fn view_help() -> &'static str {
        "Workbench commands:
  :new             create new_file.<ext> in the selected language
  :open <file>     make <file> the active file and show it
  :files           list files
  :rename <file> [new-name]
  :rm <file>       delete <file> (asks first)
  :edit            replace the active file's content
  :cat             show the active file
  :lang <name>     language for new files (id, name or extension)
  :theme           toggle light/dark
  :run             compose index page and write the preview
  :preview         show/hide the preview panel
  :quit
Anything else goes to the terminal (try 'help')."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::FileSurface;
    use webide_core::{Config, PreviewPipeline, ReadySignal};

    fn app(seed: bool) -> App {
        let mut config = Config::default();
        config.session.seed_samples = seed;
        let (_signal, ready) = ReadySignal::new();
        let pipeline = PreviewPipeline::spawn(FileSurface::new("unused.html"), ready);
        App::new(&config, pipeline)
    }

    #[tokio::test]
    async fn test_view_files_marks_active() {
        let app = app(true);
        let files = app.view_files();
        assert!(files.contains("* index.html"));
        assert!(files.contains("  styles.css"));
        assert!(files.contains("New files: JavaScript"));
    }

    #[tokio::test]
    async fn test_view_editor_numbers_lines() {
        let mut app = app(false);
        app.handle_line(":new");
        app.handle_line(":edit");
        app.handle_line("a");
        app.handle_line("b");
        app.handle_line(".");

        let editor = app.view_editor();
        assert!(editor.starts_with("── new_file.js [javascript, vs-dark] ──"));
        assert!(editor.contains("\n1 │ a\n2 │ b"));
    }

    #[tokio::test]
    async fn test_view_editor_options() {
        let app = app(false);
        assert_eq!(
            app.view_editor_options(),
            "Editor: 'Fira Code', 'Consolas', 'Monaco', monospace 14pt, line height 1.5, \
             minimap on, word wrap on, cursor smooth"
        );
    }

    #[tokio::test]
    async fn test_prompts() {
        let mut app = app(true);
        assert_eq!(app.view_prompt(), "$ ");
        app.handle_line(":rm main.py");
        assert_eq!(
            app.view_prompt(),
            "Are you sure you want to delete main.py? [y/N] "
        );
    }
}
