// ============================================================
// Layer 3 — QaPair Domain Type
// ============================================================
// A generated question together with the chunk of cleaned text
// it was generated from. The chunk doubles as the "answer" in
// the dataset file:
//
//   Q: What is Scrum?
//   A: Scrum is a framework for ...
//
// Pairs are created once by the generator and then serialised;
// nothing mutates them afterwards.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QaPair {
    /// The question decoded from the model output
    pub question: String,

    /// The source chunk, stored verbatim
    pub chunk: String,
}

impl QaPair {
    pub fn new(question: impl Into<String>, chunk: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            chunk:    chunk.into(),
        }
    }

    /// Render this pair in the dataset line format.
    pub fn to_record(&self) -> String {
        format!("Q: {}\nA: {}\n\n", self.question, self.chunk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_format() {
        let pair = QaPair::new("What is Kanban?", "Kanban is a method.");
        assert_eq!(pair.to_record(), "Q: What is Kanban?\nA: Kanban is a method.\n\n");
    }
}
