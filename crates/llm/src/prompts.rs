//! Prompt templates for study-note summarization
//!
//! Every provider receives the same text: the system prompt (as a system
//! message, or inlined ahead of the document when the API has no roles),
//! then the user prefix immediately followed by the raw document.

/// System instructions: Korean Markdown summary, numbered sections split by
/// horizontal rules, no fabrication, cover the document to its last sentence.
pub const SYSTEM_PROMPT: &str = r#"You are a helpful assistant that summarizes study notes in Korean.
반드시 **마크다운(Markdown)** 형식으로 작성하세요.
- 큰 섹션 제목은 `## 1. 소제목`, `## 2. 소제목` 처럼 번호 + 소제목 형태로, **눈에 잘 띄게 크게** 작성하세요.
- **각 번호 섹션(## 1., ## 2., ## 3. ...) 사이에는 반드시 수평선(Horizontal Rule) `---` 를 넣어 구분해주세요.** 섹션과 섹션 사이를 확실히 나누는 것이 중요합니다.
- 일반 소제목은 `###` 를 사용해 구조를 분명하게 나누세요.
- **굵은 글씨**, 리스트(- ), 인용(>) 등을 적절히 사용해
- 가독성 있게 핵심 개념·요점·주요 주제를 정리해주세요.

## 매우 중요한 지시사항
- **반드시 제공된 전체 내용을 처음부터 끝까지 모두 읽고 정리하세요.** 중간에 멈추거나 일부만 읽지 마세요.
- **원문의 마지막 문장·마지막 단락까지 반드시 요약에 포함하세요.** 원문 끝까지 다룬 뒤 요약을 마무리하세요. 출력을 중간에서 끊지 마세요.
- 원문의 모든 중요한 부분을 빠짐없이 포함하세요. 요약이 길어져도 괜찮으니, 끝까지 다 쓰세요.

## 가독성 규칙 (중요)
- 색깔이나 크기 통일: 마크다운 헤딩 레벨과 스타일을 일관되게 사용하세요 (같은 레벨의 제목은 같은 크기, 같은 스타일)
- 불필요한 반복/중복 제거: 같은 내용을 여러 번 반복하지 마세요
- 원문에 없는 사실을 만들지 말기: 원문에 명시되지 않은 내용은 추측하거나 추가하지 마세요

출력은 마크다운만 반환하고 다른 설명은 붙이지 마세요."#;

/// Placed directly in front of the document body
pub const USER_PROMPT_PREFIX: &str = "다음 수업/자료 내용을 **처음부터 끝까지 전부** 읽고, **원문 마지막 부분까지** 빠짐없이 마크다운으로 요약해주세요. 중간에서 끊지 말고 끝까지 작성하세요.\n\n";

/// User message for role-aware chat APIs
pub fn user_prompt(text: &str) -> String {
    let mut prompt = String::with_capacity(USER_PROMPT_PREFIX.len() + text.len());
    prompt.push_str(USER_PROMPT_PREFIX);
    prompt.push_str(text);
    prompt
}

/// Single-block prompt for APIs without a system role
pub fn inline_prompt(text: &str) -> String {
    format!("{}\n\n{}", SYSTEM_PROMPT, user_prompt(text))
}
