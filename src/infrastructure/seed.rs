use crate::domain::catalog::{Category, Website, WebsiteStatus};
use crate::domain::session::SessionService;

struct SeedWebsite {
    title: &'static str,
    url: &'static str,
    description: &'static str,
    category_slug: &'static str,
}

const SEED_CATEGORIES: &[(&str, &str)] = &[
    ("AI Chat", "ai-chat"),
    ("AI Art", "ai-art"),
    ("AI Writing", "ai-writing"),
    ("AI Coding", "ai-coding"),
    ("AI Tools", "ai-tools"),
    ("Large Language Models", "llm"),
];

const SEED_WEBSITES: &[SeedWebsite] = &[
    SeedWebsite {
        title: "ChatGPT",
        url: "https://chat.openai.com",
        description: "Conversational AI assistant by OpenAI for everyday questions and tasks.",
        category_slug: "ai-chat",
    },
    SeedWebsite {
        title: "Claude",
        url: "https://claude.ai",
        description: "AI assistant by Anthropic, strong at writing, analysis and coding.",
        category_slug: "ai-chat",
    },
    SeedWebsite {
        title: "Midjourney",
        url: "https://www.midjourney.com",
        description: "Text-to-image generation producing high-quality artwork from prompts.",
        category_slug: "ai-art",
    },
    SeedWebsite {
        title: "Stable Diffusion",
        url: "https://stability.ai",
        description: "Open image generation models and tooling from Stability AI.",
        category_slug: "ai-art",
    },
    SeedWebsite {
        title: "GitHub Copilot",
        url: "https://github.com/features/copilot",
        description: "AI pair programmer with inline code completion in the editor.",
        category_slug: "ai-coding",
    },
    SeedWebsite {
        title: "Cursor",
        url: "https://www.cursor.com",
        description: "AI-first code editor built for working alongside a coding assistant.",
        category_slug: "ai-coding",
    },
    SeedWebsite {
        title: "Grammarly",
        url: "https://www.grammarly.com",
        description: "Writing assistant for grammar, tone and clarity suggestions.",
        category_slug: "ai-writing",
    },
    SeedWebsite {
        title: "Hugging Face",
        url: "https://huggingface.co",
        description: "Model hub and tooling for open machine-learning projects.",
        category_slug: "ai-tools",
    },
    SeedWebsite {
        title: "Perplexity",
        url: "https://www.perplexity.ai",
        description: "AI answer engine that cites its sources.",
        category_slug: "ai-tools",
    },
    SeedWebsite {
        title: "Gemini",
        url: "https://gemini.google.com",
        description: "Google's family of large language models and assistant.",
        category_slug: "llm",
    },
];

pub fn default_categories() -> Vec<Category> {
    SEED_CATEGORIES
        .iter()
        .enumerate()
        .map(|(idx, (name, slug))| Category {
            id: idx as i64 + 1,
            name: (*name).to_string(),
            slug: (*slug).to_string(),
        })
        .collect()
}

pub fn default_websites(categories: &[Category]) -> Vec<Website> {
    SEED_WEBSITES
        .iter()
        .enumerate()
        .filter_map(|(idx, seed)| {
            let category = categories.iter().find(|c| c.slug == seed.category_slug)?;
            Some(Website {
                id: idx as i64 + 1,
                title: seed.title.to_string(),
                url: seed.url.to_string(),
                description: seed.description.to_string(),
                category_id: category.id,
                thumbnail: Some(format!("{}/favicon.ico", seed.url.trim_end_matches('/'))),
                thumbnail_base64: None,
                status: WebsiteStatus::Approved,
                visits: 0,
                likes: 0,
                last_visited_at: None,
            })
        })
        .collect()
}

/// Write the default catalog into the session store unless websites are
/// already present. Returns the number of websites written, zero when
/// seeding was skipped.
pub fn ensure_seeded(session: &SessionService) -> usize {
    if !session.websites().is_empty() {
        tracing::debug!("catalog already present, skipping seed");
        return 0;
    }

    let categories = default_categories();
    let websites = default_websites(&categories);
    session.set_categories(&categories);
    session.set_websites(&websites);
    tracing::info!(
        categories = categories.len(),
        websites = websites.len(),
        "seeded default catalog"
    );
    websites.len()
}
