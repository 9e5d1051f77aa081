//! Human-authored fallback copy.
//!
//! `{topic}` is replaced with the request topic when a template is rendered.

use postcraft_core::{Language, Length, Platform};

const SHORT_EN: [&str; 4] = [
    "✨ Struggling with {topic}? Here's what you need to know...",
    "💡 Want to master {topic}? Start with this...",
    "🚀 Your journey to {topic} begins here:",
    "💪 Transform your {topic} with this simple tip:",
];

const SHORT_BM: [&str; 4] = [
    "✨ Bermasalah dengan {topic}? Ini yang anda perlu tahu...",
    "💡 Mahu kuasai {topic}? Mulakan dengan ini...",
    "🚀 Perjalanan anda ke arah {topic} bermula di sini:",
    "💪 Ubah {topic} anda dengan tip mudah ini:",
];

const MEDIUM_EN: [&str; 4] = [
    "✨ Struggling with {topic}?\n\nYou're not alone. Here's what changed everything for me...",
    "💡 The truth about {topic} that nobody tells you:\n\n",
    "🚀 Want to transform your {topic}?\n\nHere's how I did it:",
    "💪 Your {topic} doesn't have to be complicated.\n\nHere's why:",
];

const MEDIUM_BM: [&str; 4] = [
    "✨ Bermasalah dengan {topic}?\n\nAnda tidak keseorangan. Ini yang mengubah segalanya untuk saya...",
    "💡 Kebenaran tentang {topic} yang tiada siapa beritahu anda:\n\n",
    "🚀 Mahu ubah {topic} anda?\n\nIni cara saya lakukannya:",
    "💪 {topic} anda tidak perlu rumit.\n\nIni sebabnya:",
];

pub(crate) const IMAGE_SUGGESTIONS: [&str; 8] = [
    "A person looking determined while working on {topic}",
    "A split image showing before/after of {topic}",
    "A close-up of hands working on {topic}",
    "A person smiling while achieving {topic}",
    "A minimalist representation of {topic}",
    "A group of people collaborating on {topic}",
    "A workspace organized for {topic}",
    "A person looking inspired while thinking about {topic}",
];

/// Template pool for a tier. Long posts are built from medium templates.
pub(crate) fn post_templates(length: Length, language: Language) -> &'static [&'static str] {
    match (length, language) {
        (Length::Short, Language::English) => &SHORT_EN,
        (Length::Short, Language::Malay) => &SHORT_BM,
        (Length::Medium | Length::Long, Language::English) => &MEDIUM_EN,
        (Length::Medium | Length::Long, Language::Malay) => &MEDIUM_BM,
    }
}

/// Built-in call-to-action lines for a language and platform.
pub(crate) fn builtin_ctas(language: Language, platform: Platform) -> &'static [&'static str] {
    match (language, platform) {
        (Language::English, Platform::Facebook) => &[
            "💬 What's your take on this?",
            "Share this if you agree!",
            "Tag someone who needs to see this!",
            "Drop a ❤️ if this resonates with you!",
        ],
        (Language::English, Platform::Instagram) => &[
            "Double tap if you agree!",
            "Tag a friend who needs this!",
            "Save this for later!",
            "Follow for more content like this!",
        ],
        (Language::English, Platform::LinkedIn) => &[
            "What are your thoughts on this?",
            "Share your experience in the comments!",
            "Connect if this resonates with you!",
            "Follow for more professional insights!",
        ],
        (Language::English, Platform::Twitter) => &[
            "RT if you agree!",
            "Like & follow for more!",
            "What's your take?",
            "Share your thoughts below!",
        ],
        (Language::English, Platform::TikTok) => &[
            "Follow for more! 🎵",
            "Drop a ❤️ if you agree!",
            "Save this for later! 📱",
            "Comment your thoughts below! 💭",
            "Share with someone who needs this! 🔄",
            "Double tap if you relate! 👆",
        ],
        (Language::Malay, Platform::Facebook) => &[
            "💬 Apa pendapat anda?",
            "Kongsi jika anda setuju!",
            "Tag seseorang yang perlu lihat ini!",
            "Tekan ❤️ jika ini bermakna untuk anda!",
        ],
        (Language::Malay, Platform::Instagram) => &[
            "Double tap jika anda setuju!",
            "Tag kawan yang perlukan ini!",
            "Simpan untuk kemudian!",
            "Follow untuk lebih banyak kandungan!",
        ],
        (Language::Malay, Platform::LinkedIn) => &[
            "Apa pendapat anda?",
            "Kongsi pengalaman anda dalam komen!",
            "Connect jika ini bermakna untuk anda!",
            "Follow untuk lebih banyak insight profesional!",
        ],
        (Language::Malay, Platform::Twitter) => &[
            "RT jika anda setuju!",
            "Like & follow untuk lebih banyak!",
            "Apa pendapat anda?",
            "Kongsi pendapat anda di bawah!",
        ],
        (Language::Malay, Platform::TikTok) => &[
            "Follow untuk lebih banyak! 🎵",
            "Tekan ❤️ jika anda setuju!",
            "Simpan untuk kemudian! 📱",
            "Komen pendapat anda di bawah! 💭",
            "Kongsi dengan yang perlukan! 🔄",
            "Double tap jika anda setuju! 👆",
        ],
    }
}

pub(crate) fn render(template: &str, topic: &str) -> String {
    template.replace("{topic}", topic)
}
