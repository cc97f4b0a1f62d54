//! Application state machine and event dispatcher.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::client::{ApiClient, Submission, SubmissionResult};

// ─── Screen ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
  /// The intake form collecting the four profile fields.
  Form,
  /// Profile summary plus the guide chat panel.
  Chat,
}

// ─── Form state ───────────────────────────────────────────────────────────────

/// The four form inputs and which one has keyboard focus.
#[derive(Debug, Clone, Default)]
pub struct FormState {
  pub name:       String,
  pub birthday:   String,
  pub birthplace: String,
  pub job_title:  String,
  pub focus:      usize,
}

impl FormState {
  pub const FIELD_COUNT: usize = 4;
  pub const LABELS: [&'static str; Self::FIELD_COUNT] = [
    "Name",
    "Birthday (YYYY-MM-DD)",
    "Place of birth",
    "Job title",
  ];

  pub fn field(&self, idx: usize) -> &str {
    match idx {
      0 => &self.name,
      1 => &self.birthday,
      2 => &self.birthplace,
      _ => &self.job_title,
    }
  }

  fn focused_mut(&mut self) -> &mut String {
    match self.focus {
      0 => &mut self.name,
      1 => &mut self.birthday,
      2 => &mut self.birthplace,
      _ => &mut self.job_title,
    }
  }

  fn focus_next(&mut self) {
    self.focus = (self.focus + 1) % Self::FIELD_COUNT;
  }

  fn focus_prev(&mut self) {
    self.focus = (self.focus + Self::FIELD_COUNT - 1) % Self::FIELD_COUNT;
  }
}

// ─── Chat state ───────────────────────────────────────────────────────────────

/// One chat bubble.
#[derive(Debug, Clone)]
pub struct ChatMessage {
  pub text:     String,
  pub from_bot: bool,
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level application state.
pub struct App {
  /// Current screen / keyboard focus.
  pub screen: Screen,

  /// Intake form inputs.
  pub form: FormState,

  /// The server's answer to the submission; set once `screen` is `Chat`.
  pub result: Option<SubmissionResult>,

  /// Chat history, oldest first.
  pub messages: Vec<ChatMessage>,

  /// The chat input line.
  pub input: String,

  /// One-line status message shown in the status bar.
  pub status_msg: String,

  /// Shared HTTP client.
  pub client: Arc<ApiClient>,
}

impl App {
  /// Create an [`App`] showing a blank form.
  pub fn new(client: ApiClient) -> Self {
    Self {
      screen: Screen::Form,
      form: FormState::default(),
      result: None,
      messages: Vec::new(),
      input: String::new(),
      status_msg: String::new(),
      client: Arc::new(client),
    }
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub async fn handle_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    // Global: Ctrl-C quits from anywhere.
    if key.modifiers.contains(KeyModifiers::CONTROL)
      && key.code == KeyCode::Char('c')
    {
      return Ok(false);
    }

    match self.screen {
      Screen::Form => self.handle_form_key(key).await,
      Screen::Chat => Ok(self.handle_chat_key(key)),
    }
  }

  async fn handle_form_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    match key.code {
      KeyCode::Esc => return Ok(false),

      KeyCode::Tab | KeyCode::Down => self.form.focus_next(),
      KeyCode::BackTab | KeyCode::Up => self.form.focus_prev(),

      KeyCode::Backspace => {
        self.form.focused_mut().pop();
      }
      KeyCode::Char(c) => {
        self.form.focused_mut().push(c);
      }

      KeyCode::Enter => self.submit_form().await,

      _ => {}
    }
    Ok(true)
  }

  fn handle_chat_key(&mut self, key: KeyEvent) -> bool {
    match key.code {
      // Start over with a blank form.
      KeyCode::Esc => {
        self.form = FormState::default();
        self.result = None;
        self.messages.clear();
        self.input.clear();
        self.status_msg.clear();
        self.screen = Screen::Form;
      }

      KeyCode::Backspace => {
        self.input.pop();
      }
      KeyCode::Char(c) => {
        self.input.push(c);
      }

      KeyCode::Enter => self.send_chat_message(),

      _ => {}
    }
    true
  }

  // ── Submission ────────────────────────────────────────────────────────────

  /// Post the form to the API; on success switch to the chat screen seeded
  /// with the welcome message.
  async fn submit_form(&mut self) {
    self.status_msg = "Submitting…".into();

    let submission = Submission {
      name:       self.form.name.clone(),
      birthday:   self.form.birthday.clone(),
      birthplace: self.form.birthplace.clone(),
      job_title:  self.form.job_title.clone(),
    };

    match self.client.submit(&submission).await {
      Ok(result) => {
        self.messages = vec![ChatMessage {
          text:     format!("Welcome {}! {}", result.name, result.chat_response),
          from_bot: true,
        }];
        self.result = Some(result);
        self.input.clear();
        self.status_msg.clear();
        self.screen = Screen::Chat;
      }
      Err(e) => {
        self.status_msg = format!("Error: {e}");
      }
    }
  }

  // ── Chat ──────────────────────────────────────────────────────────────────

  /// Append the typed message and its locally-generated echo reply.
  fn send_chat_message(&mut self) {
    let text = self.input.trim().to_owned();
    if text.is_empty() {
      return;
    }
    self.input.clear();

    let reply = self.echo_reply(&text);
    self.messages.push(ChatMessage { text, from_bot: false });
    self.messages.push(ChatMessage { text: reply, from_bot: true });
  }

  /// Echo-style reply, generated locally: questions get one nudge,
  /// statements the other.
  fn echo_reply(&self, message: &str) -> String {
    let (sun_sign, hd_type) = match &self.result {
      Some(r) => (r.sun_sign.as_str(), r.hd_type.as_str()),
      None => ("Unknown", "Unknown"),
    };
    let suggestion = if message.contains('?') {
      "consider your inner guidance"
    } else {
      "follow your intuition on this matter"
    };
    format!("As a {sun_sign} {hd_type}, I suggest you {suggestion}.")
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
