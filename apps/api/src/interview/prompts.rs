// Prompt templates for the interview generator.
// Each builder fills its template in a single `format!` pass, so text inside
// one value is never treated as a placeholder for another.

/// Question generation prompt.
pub fn build_questions_prompt(company: &str, title: &str, description: &str) -> String {
    format!(
        r#"You are a senior HR professional conducting an interview for the position of {title} at {company}.

Based on the following job description, generate 6-8 relevant interview questions that would help assess the candidate's suitability for this role:

Job Description: {description}

Please provide questions that cover:
- Technical skills and experience
- Behavioral/situational scenarios
- Problem-solving abilities
- Cultural fit and motivation

Return the questions as a JSON array of strings."#
    )
}

/// Answer analysis prompt. The numbered sections are what the report
/// renderer splits feedback on.
pub fn build_analysis_prompt(question: &str, answer: &str) -> String {
    format!(
        r#"As a senior HR professional, analyze this interview answer:

Question: {question}
Answer: {answer}

Provide constructive feedback covering:
1. Strengths of the answer
2. Areas for improvement
3. Specific suggestions for better responses
4. Overall rating (1-10)

Format your response as a structured analysis."#
    )
}
