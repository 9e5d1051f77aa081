//! Prompt construction for remote post generation.

use postcraft_core::{GenerationRequest, Language, PromptContext};

const FACTUALITY_GUIDELINES: [&str; 6] = [
    "Only include verified, factual information",
    "Avoid making unsubstantiated claims",
    "If citing statistics or facts, ensure they are from reliable sources",
    "Do not generate content that could be misleading or false",
    "Focus on well-established, widely accepted information",
    "If uncertain about a fact, either omit it or clearly indicate it's an opinion",
];

const CASUAL_MALAY_DIRECTIVE: &str = "Use relaxed, everyday Malaysian Bahasa Malaysia, \
the way people actually write on social media, rather than formal textbook language.";

/// Builds the full prompt for a request, budgeted by its length tier.
///
/// # Examples
///
/// ```
/// use postcraft_content::build_prompt;
/// use postcraft_core::GenerationRequest;
/// use std::time::Duration;
///
/// let request = GenerationRequest::parse("focus", "long", "LinkedIn", "Professional", "EN").unwrap();
/// let prompt = build_prompt(&request);
///
/// assert_eq!(*prompt.max_tokens(), 2000);
/// assert_eq!(*prompt.timeout(), Duration::from_secs(90));
/// assert!(prompt.user().contains("professional social media post about focus for LinkedIn"));
/// ```
pub fn build_prompt(request: &GenerationRequest) -> PromptContext {
    PromptContext::new(
        system_prompt(request.language),
        user_prompt(request),
        request.length.budget(),
    )
}

/// Persona and accuracy rules for the system message.
pub fn system_prompt(language: Language) -> String {
    let mut prompt = format!(
        "You are a creative social media copywriter who specializes in writing engaging, \
         emotionally resonant posts in {}.\n\
         Your primary responsibility is to ensure all information is factual and verified.\n\
         Use 'you' and 'your' to create a personal connection with the reader.\n\
         For long posts, ensure proper paragraph breaks and structure.\n\
         Never generate content that could be misleading or false.\n\
         If you're unsure about a fact, either omit it or clearly mark it as an opinion.\n\
         Always prioritize accuracy over engagement.",
        language.display_name()
    );

    if language == Language::Malay {
        prompt.push('\n');
        prompt.push_str(CASUAL_MALAY_DIRECTIVE);
    }
    prompt
}

/// Post instructions for the user message.
pub fn user_prompt(request: &GenerationRequest) -> String {
    let guidelines = FACTUALITY_GUIDELINES
        .iter()
        .enumerate()
        .map(|(i, line)| format!("{}. {}", i + 1, line))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Create a {tone} social media post about {topic} for {platform}.\n\
         {directive}.\n\
         Write in second-person perspective (using 'you' and 'your').\n\
         Length should be {length} ({words}).\n\
         \n\
         IMPORTANT GUIDELINES:\n\
         {guidelines}\n\
         \n\
         Make it engaging, emotional, and authentic while maintaining accuracy.\n\
         Include relevant emojis naturally in the text.\n\
         Focus on storytelling and relatability.\n\
         For long posts, ensure the content is well-structured with clear paragraphs.\n\
         Format: Return only the post content, no additional text.",
        tone = request.tone.to_lowercase(),
        topic = request.topic,
        platform = request.platform,
        directive = request.language.directive(),
        length = request.length,
        words = request.length.word_target(),
        guidelines = guidelines,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(language: &str, length: &str) -> GenerationRequest {
        GenerationRequest::parse("morning routines", length, "Instagram", "Inspirational", language)
            .unwrap()
    }

    #[test]
    fn user_prompt_carries_request_fields() {
        let prompt = user_prompt(&request("EN", "medium"));
        assert!(prompt.starts_with(
            "Create a inspirational social media post about morning routines for Instagram."
        ));
        assert!(prompt.contains("Write in English."));
        assert!(prompt.contains("Length should be medium (100-150 words)."));
        assert!(prompt.contains("second-person perspective"));
        assert!(prompt.ends_with("Return only the post content, no additional text."));
    }

    #[test]
    fn user_prompt_lists_six_guidelines() {
        let prompt = user_prompt(&request("EN", "short"));
        for n in 1..=6 {
            assert!(prompt.contains(&format!("\n{}. ", n)), "guideline {} missing", n);
        }
        assert!(!prompt.contains("\n7. "));
    }

    #[test]
    fn malay_prompts_switch_language() {
        let request = request("BM", "short");
        assert!(user_prompt(&request).contains("Write in Bahasa Malaysia."));

        let system = system_prompt(Language::Malay);
        assert!(system.contains("posts in Bahasa Malaysia"));
        assert!(system.ends_with(CASUAL_MALAY_DIRECTIVE));
    }

    #[test]
    fn english_system_prompt_has_no_register_directive() {
        let system = system_prompt(Language::English);
        assert!(system.contains("posts in English"));
        assert!(!system.contains(CASUAL_MALAY_DIRECTIVE));
    }

    #[test]
    fn budget_follows_length() {
        let prompt = build_prompt(&request("EN", "short"));
        assert_eq!(*prompt.max_tokens(), 400);
        assert_eq!(prompt.timeout().as_secs(), 30);
    }
}
