//! Output trait for rendering reports to different formats.

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations decide *how* to render.
pub trait Output {
    /// Render a step heading, e.g. `Installing packages:`.
    fn heading(&mut self, text: &str);

    /// Render a labelled item belonging to the current step.
    fn item(&mut self, label: &str, value: &str);

    /// Render a block of text captured from an external command.
    fn preformatted(&mut self, text: &str);
}

/// A report that can render itself to an output.
pub trait Report {
    /// Render this report to the given output.
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output implementation.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn heading(&mut self, text: &str) {
        println!("{}", text);
    }

    fn item(&mut self, label: &str, value: &str) {
        println!("\t{}: {}", label, value);
    }

    fn preformatted(&mut self, text: &str) {
        println!("{}", text);
    }
}

/// Collects rendered lines in memory.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct BufferOutput {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl Output for BufferOutput {
    fn heading(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn item(&mut self, label: &str, value: &str) {
        self.lines.push(format!("\t{}: {}", label, value));
    }

    fn preformatted(&mut self, text: &str) {
        self.lines.extend(text.lines().map(str::to_string));
    }
}
