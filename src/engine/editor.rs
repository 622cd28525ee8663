//! Query text editing with selection and undo.
//!
//! The editor is a command-driven state machine: every keystroke the
//! runtime cares about becomes an [`EditCommand`], and applying a
//! command yields the next text state. Destructive commands push the
//! prior `(text, cursor)` pair onto the undo stack first; undo restores
//! exactly that pair and nothing else (selection is not saved).

/// A discrete edit operation on the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditCommand {
	/// Insert a character at the cursor, replacing the selection if any.
	Insert(char),
	/// Delete the selection, or the character before the cursor.
	Backspace,
	/// Move the cursor one position left, collapsing the selection.
	MoveLeft,
	/// Move the cursor one position right, collapsing the selection.
	MoveRight,
	/// Grow the selection one position to the left.
	ExtendLeft,
	/// Grow the selection one position to the right.
	ExtendRight,
	/// Select the entire query.
	SelectAll,
	/// Pop the undo stack, restoring the prior text and cursor.
	Undo,
}

/// Owns the filter query, its cursor, selection, and undo history.
///
/// Cursor and selection bounds are character indices; every mutation
/// keeps them within `0..=len` by construction.
#[derive(Debug, Clone, Default)]
pub struct QueryEditor {
	text: String,
	cursor: usize,
	selection_start: usize,
	selection_end: usize,
	undo_stack: Vec<(String, usize)>,
}

impl QueryEditor {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Start with a pre-filled query, cursor at the end. Used for the
	/// `--query` flag; does not seed the undo stack.
	#[must_use]
	pub fn with_text(text: impl Into<String>) -> Self {
		let text = text.into();
		let len = text.chars().count();
		Self {
			text,
			cursor: len,
			selection_start: len,
			selection_end: len,
			undo_stack: Vec::new(),
		}
	}

	#[must_use]
	pub fn text(&self) -> &str {
		&self.text
	}

	/// Cursor position in characters.
	#[must_use]
	pub fn cursor(&self) -> usize {
		self.cursor
	}

	/// Selection bounds in characters, sorted low to high. Equal bounds
	/// mean no selection.
	#[must_use]
	pub fn selection(&self) -> (usize, usize) {
		if self.selection_start <= self.selection_end {
			(self.selection_start, self.selection_end)
		} else {
			(self.selection_end, self.selection_start)
		}
	}

	#[must_use]
	pub fn has_selection(&self) -> bool {
		self.selection_start != self.selection_end
	}

	/// Apply one command. Returns `true` when the text changed, which
	/// is the engine's cue to re-run layout and reset the scroll.
	pub fn apply(&mut self, command: EditCommand) -> bool {
		let before = self.text.clone();
		match command {
			EditCommand::Insert(c) => self.insert(c),
			EditCommand::Backspace => self.backspace(),
			EditCommand::MoveLeft => {
				if self.cursor > 0 {
					self.cursor -= 1;
					self.collapse_selection();
				}
			}
			EditCommand::MoveRight => {
				if self.cursor < self.len() {
					self.cursor += 1;
					self.collapse_selection();
				}
			}
			EditCommand::ExtendLeft => {
				if self.cursor > 0 {
					self.cursor -= 1;
					self.selection_end = self.cursor;
				}
			}
			EditCommand::ExtendRight => {
				if self.cursor < self.len() {
					self.cursor += 1;
					self.selection_end = self.cursor;
				}
			}
			EditCommand::SelectAll => {
				self.selection_start = 0;
				self.selection_end = self.len();
				self.cursor = self.len();
			}
			EditCommand::Undo => {
				if let Some((text, cursor)) = self.undo_stack.pop() {
					self.text = text;
					self.cursor = cursor;
					self.collapse_selection();
				}
			}
		}
		self.text != before
	}

	fn len(&self) -> usize {
		self.text.chars().count()
	}

	fn byte_index(&self, char_index: usize) -> usize {
		self.text
			.char_indices()
			.nth(char_index)
			.map_or(self.text.len(), |(i, _)| i)
	}

	fn collapse_selection(&mut self) {
		self.selection_start = self.cursor;
		self.selection_end = self.cursor;
	}

	fn push_undo(&mut self) {
		self.undo_stack.push((self.text.clone(), self.cursor));
	}

	fn insert(&mut self, c: char) {
		if self.has_selection() {
			let (start, end) = self.selection();
			self.push_undo();
			self.replace_chars(start, end, c);
			self.cursor = start + 1;
		} else {
			self.push_undo();
			let at = self.byte_index(self.cursor);
			self.text.insert(at, c);
			self.cursor += 1;
		}
		self.collapse_selection();
	}

	fn backspace(&mut self) {
		if self.has_selection() {
			let (start, end) = self.selection();
			self.push_undo();
			self.remove_chars(start, end);
			self.cursor = start;
			self.collapse_selection();
		} else if self.cursor > 0 {
			self.push_undo();
			self.remove_chars(self.cursor - 1, self.cursor);
			self.cursor -= 1;
			self.collapse_selection();
		}
	}

	fn remove_chars(&mut self, start: usize, end: usize) {
		let from = self.byte_index(start);
		let to = self.byte_index(end);
		self.text.replace_range(from..to, "");
	}

	fn replace_chars(&mut self, start: usize, end: usize, c: char) {
		let from = self.byte_index(start);
		let to = self.byte_index(end);
		self.text.replace_range(from..to, "");
		self.text.insert(from, c);
	}
}
