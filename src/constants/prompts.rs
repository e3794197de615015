pub const TRIVIA_SYSTEM_PROMPT: &str = "You are a trivia question generator.";

pub const DAILY_TRIVIA_COUNT: u32 = 5;

pub const CROSSWORD_PROMPT: &str = r#"Create a 10x10 crossword puzzle on the theme of astronomy or space.

Instructions:
- Return ONLY a JSON object with two fields: "grid" and "clues"
- "grid" must be a 2D array of 10x10.
  - Use "" (empty string) for white squares where input is allowed.
  - Use "B" for black squares.
- "clues" must be an array of 10 clue objects. Each clue should include:
  {
    "number": 1,
    "hint": "The red planet",
    "answer": "MARS",
    "direction": "down" or "across",
    "start": 12,
    "color": "text-red-600"
  }

Rules:
- Clues must not overlap unless intentionally intersecting by letter.
- Avoid invalid overlaps or exceeding grid bounds.
- All answers must be between 3 and 8 uppercase letters.

Return ONLY JSON, no explanation and no formatting:
{
  "grid": [
    ["", "", "B", "", "", "", "", "", "B", ""],
    ...
  ],
  "clues": [ ... ]
}"#;

pub fn daily_trivia_prompt(topic: &str, difficulty: &str) -> String {
    format!(
        r#"Generate {count} multiple-choice trivia questions on "{topic}" at "{difficulty}" difficulty.

Each question must include:
- "question": the actual question text
- "mcqs": an array of 4 answer choices
- "correctAnswer": the index (0-3) of the correct option

Return ONLY a JSON array of {count} such objects. No explanations. No text. Strictly JSON format."#,
        count = DAILY_TRIVIA_COUNT,
    )
}

pub fn word_search_prompt(title: &str, text_content: &str) -> String {
    format!(
        r#"You are an AI assistant generating a Word Search quiz for students.

From the following educational content, extract **15 important terms** and generate an **identification-style clue** for each.

Respond ONLY in JSON with this format:

{{
  "title": "{title}",
  "questions": [
    {{ "question": "Who is the ___?", "answer": "Keyword" }}
  ]
}}

Text:
"""{text_content}""""#
    )
}

pub fn word_list_prompt(title: &str, description: &str, num_words: u32) -> String {
    format!(
        r#"Generate exactly {num_words} distinct, single-word terms suitable for a classroom word-search puzzle.

- Theme title: "{title}"
- Description / context: "{description}"
- Words must be 3-15 letters, no spaces, no punctuation.
- Output ONLY valid JSON: {{ "words": ["TERM1", "TERM2", ...] }}"#
    )
}
