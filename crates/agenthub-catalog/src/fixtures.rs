//! Embedded fallback catalog data.
//!
//! Served whenever the remote catalog API is unreachable or
//! misconfigured, so listing pages always render something. The
//! collections are built fresh per call and injected into
//! [`crate::service::CatalogService`]; nothing here is shared mutable
//! state. Chatflow nested sections intentionally keep empty-string
//! placeholders; the seed data never had real values for them.

use crate::models::{
    Agent, AgentMetadata, Chatflow, ChatflowMetadata, Integration, Media, Pricing, Requirements,
};

/// Fallback agent collection. Flag placement is deliberately mixed
/// (flat on some records, nested on others) to mirror the remote
/// dataset the accessors were written for.
pub fn agents() -> Vec<Agent> {
    vec![
        Agent {
            id: "data-analyzer".to_string(),
            slug: "data-analyzer".to_string(),
            name: "Data Analyzer".to_string(),
            description: "Connects to your warehouses and spreadsheets, profiles the data \
                          and answers analytical questions in plain language."
                .to_string(),
            short_description: "Plain-language analytics over your data".to_string(),
            category: "Data Analysis".to_string(),
            capabilities: vec![
                "SQL generation".to_string(),
                "Chart summaries".to_string(),
                "Anomaly detection".to_string(),
            ],
            price: Some("$49/mo".to_string()),
            featured: Some(true),
            popular: Some(true),
            new: None,
            metadata: None,
            documentation: None,
            media: None,
            pricing: None,
            integration: None,
            requirements: None,
        },
        Agent {
            id: "content-writer".to_string(),
            slug: "content-writer".to_string(),
            name: "Content Writer".to_string(),
            description: "Drafts blog posts, product copy and release notes in your brand \
                          voice from a short brief."
                .to_string(),
            short_description: "On-brand long-form drafting".to_string(),
            category: "Content".to_string(),
            capabilities: vec!["Tone matching".to_string(), "SEO outlines".to_string()],
            price: Some("$29/mo".to_string()),
            featured: None,
            popular: None,
            new: None,
            // Flags live only in metadata for this record.
            metadata: Some(AgentMetadata {
                featured: Some(true),
                popular: None,
                new: None,
                rating: Some(4.6),
                review_count: Some(212),
            }),
            documentation: None,
            media: None,
            pricing: None,
            integration: None,
            requirements: None,
        },
        Agent {
            id: "code-assistant".to_string(),
            slug: "code-assistant".to_string(),
            name: "Code Assistant".to_string(),
            description: "Reviews pull requests, suggests fixes and writes unit tests for \
                          the changes it flags."
                .to_string(),
            short_description: "PR review and test generation".to_string(),
            category: "Development".to_string(),
            capabilities: vec!["Code review".to_string(), "Test generation".to_string()],
            price: None,
            featured: None,
            popular: Some(true),
            new: None,
            metadata: None,
            documentation: None,
            media: None,
            pricing: None,
            integration: None,
            requirements: None,
        },
        Agent {
            id: "research-agent".to_string(),
            slug: "research-agent".to_string(),
            name: "Research Agent".to_string(),
            description: "Gathers and cross-checks sources on a topic, then produces a \
                          cited research memo."
                .to_string(),
            short_description: "Cited research memos on demand".to_string(),
            category: "Data Analysis".to_string(),
            capabilities: vec!["Web research".to_string(), "Citation tracking".to_string()],
            price: None,
            featured: None,
            popular: None,
            new: None,
            metadata: Some(AgentMetadata {
                featured: None,
                popular: None,
                new: Some(true),
                rating: None,
                review_count: None,
            }),
            documentation: None,
            media: None,
            pricing: None,
            integration: None,
            requirements: None,
        },
        Agent {
            id: "support-bot".to_string(),
            slug: "support-bot".to_string(),
            name: "Support Bot".to_string(),
            description: "Answers customer questions from your help-center content and \
                          escalates the ones it cannot resolve."
                .to_string(),
            short_description: "Help-center-grounded support answers".to_string(),
            category: "Customer Support".to_string(),
            capabilities: vec![
                "Knowledge-base retrieval".to_string(),
                "Ticket escalation".to_string(),
            ],
            price: Some("$19/mo".to_string()),
            featured: None,
            popular: None,
            new: Some(true),
            metadata: None,
            documentation: None,
            media: None,
            pricing: None,
            integration: None,
            requirements: None,
        },
    ]
}

/// Fallback chatflow collection.
pub fn chatflows() -> Vec<Chatflow> {
    vec![
        Chatflow {
            id: "chatflow1".to_string(),
            slug: "lead-qualifier".to_string(),
            name: "Lead Qualifier".to_string(),
            description: "Qualifies inbound leads through a short guided conversation and \
                          routes them to the right pipeline stage."
                .to_string(),
            short_description: "Conversational lead qualification".to_string(),
            category: "Sales".to_string(),
            capabilities: vec!["CRM handoff".to_string(), "Lead scoring".to_string()],
            metadata: ChatflowMetadata {
                rating: 4.4,
                review_count: 87,
                featured: true,
                popular: true,
                new: false,
                created_at: "".to_string(),
                updated_at: "".to_string(),
            },
            media: Media::default(),
            pricing: Pricing::default(),
            integration: Integration::default(),
            requirements: Requirements::default(),
            documentation: None,
        },
        Chatflow {
            id: "chatflow2".to_string(),
            slug: "faq-concierge".to_string(),
            name: "FAQ Concierge".to_string(),
            description: "Walks visitors through product questions with follow-ups drawn \
                          from your documentation."
                .to_string(),
            short_description: "Guided product Q&A".to_string(),
            category: "Customer Support".to_string(),
            capabilities: vec!["Doc retrieval".to_string()],
            metadata: ChatflowMetadata {
                rating: 4.1,
                review_count: 54,
                featured: false,
                popular: false,
                new: true,
                created_at: "".to_string(),
                updated_at: "".to_string(),
            },
            media: Media::default(),
            pricing: Pricing::default(),
            integration: Integration::default(),
            requirements: Requirements::default(),
            documentation: None,
        },
        Chatflow {
            id: "chatflow3".to_string(),
            slug: "onboarding-guide".to_string(),
            name: "Onboarding Guide".to_string(),
            description: "Takes new users through account setup step by step and files \
                          anything it cannot answer."
                .to_string(),
            short_description: "Step-by-step setup conversations".to_string(),
            category: "Sales".to_string(),
            capabilities: vec!["Progress tracking".to_string()],
            metadata: ChatflowMetadata {
                rating: 3.9,
                review_count: 21,
                featured: false,
                popular: false,
                new: false,
                created_at: "".to_string(),
                updated_at: "".to_string(),
            },
            media: Media::default(),
            pricing: Pricing::default(),
            integration: Integration::default(),
            requirements: Requirements::default(),
            documentation: None,
        },
    ]
}
