use log::warn;
use yew::prelude::*;

use super::glass_card::GlassCard;
use crate::i18n::context::use_language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    Web,
    Automation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectStats {
    pub hours_saved: u32,
}

/// A portfolio entry. Copy lives in the dictionaries under
/// `portfolio.<key>.title` and `portfolio.<key>.description`.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: &'static str,
    pub key: &'static str,
    pub category: Category,
    pub image: Option<&'static str>,
    pub stats: Option<ProjectStats>,
    pub technologies: &'static [&'static str],
    pub link: Option<&'static str>,
    /// Glyphs for the three steps of an automation's flow.
    pub flow: Option<[&'static str; 3]>,
}

impl Project {
    pub fn title_key(&self) -> String {
        format!("portfolio.{}.title", self.key)
    }

    pub fn description_key(&self) -> String {
        format!("portfolio.{}.description", self.key)
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: "1",
        key: "intellity",
        category: Category::Web,
        image: Some("https://images.unsplash.com/photo-1451187580459-43490279c0fa?q=80&w=2072&auto=format&fit=crop"),
        stats: None,
        technologies: &["React", "AI", "Green Tech"],
        link: Some("https://intellity.gr/"),
        flow: None,
    },
    Project {
        id: "2",
        key: "withoutSessions",
        category: Category::Web,
        image: Some("/without-sessions.jpg"),
        stats: None,
        technologies: &["React", "Netlify", "Framer Motion"],
        link: Some("https://withoutsessions.netlify.app/"),
        flow: None,
    },
    Project {
        id: "3",
        key: "rollySkg",
        category: Category::Web,
        image: None,
        stats: None,
        technologies: &["React", "Tailwind"],
        link: None,
        flow: None,
    },
    Project {
        id: "4",
        key: "eaConstructions",
        category: Category::Web,
        image: None,
        stats: None,
        technologies: &["React", "Tailwind"],
        link: None,
        flow: None,
    },
    Project {
        id: "5",
        key: "cocaCola",
        category: Category::Web,
        image: None,
        stats: None,
        technologies: &["Canvas", "Scroll Animation"],
        link: None,
        flow: None,
    },
    Project {
        id: "n1",
        key: "googleMaps",
        category: Category::Automation,
        image: None,
        stats: Some(ProjectStats { hours_saved: 25 }),
        technologies: &["Google Maps", "GPT-4o", "Telegram", "Pinecone"],
        link: Some("https://n8n.io/workflows/11381-monitor-google-maps-reviews-with-gpt-4o-sentiment-analysis-and-telegram-rag-agent-using-pinecone/"),
        flow: Some(["⌖", "◉", "✆"]),
    },
    Project {
        id: "n2",
        key: "financialDoc",
        category: Category::Automation,
        image: None,
        stats: Some(ProjectStats { hours_saved: 60 }),
        technologies: &["Gmail", "OpenAI", "Google Sheets"],
        link: Some("https://n8n.io/workflows/11290-financial-document-extraction-from-gmail-to-google-sheets/"),
        flow: Some(["✉", "▤", "▦"]),
    },
    Project {
        id: "n3",
        key: "expenseLogging",
        category: Category::Automation,
        image: None,
        stats: None,
        technologies: &["Telegram", "Google Sheets"],
        link: None,
        flow: Some(["✆", "◉", "▦"]),
    },
    Project {
        id: "n4",
        key: "hotelBooking",
        category: Category::Automation,
        image: None,
        stats: None,
        technologies: &["Gmail", "GPT-4o-mini", "Google Sheets"],
        link: None,
        flow: Some(["✉", "◉", "▦"]),
    },
];

pub fn projects_in(category: Category) -> impl Iterator<Item = &'static Project> {
    PROJECTS.iter().filter(move |p| p.category == category)
}

fn open_in_new_tab(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.open_with_url_and_target(url, "_blank") {
        warn!("Could not open {}: {:?}", url, e);
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: &'static Project,
}

#[function_component(WebProjectCard)]
fn web_project_card(props: &ProjectCardProps) -> Html {
    let language = use_language();
    let project = props.project;
    let title = language.t(&project.title_key());

    html! {
        <GlassCard class="project-card web">
            <div class="project-media">
                {
                    match project.image {
                        Some(src) => html! { <img src={src} alt={title.clone()} loading="lazy" /> },
                        None => html! {
                            <div class="project-placeholder">{ title.chars().take(1).collect::<String>() }</div>
                        },
                    }
                }
                if let Some(link) = project.link {
                    <div class="project-overlay">
                        <a href={link} target="_blank" rel="noopener noreferrer" class="visit-button">
                            { language.t("portfolio.visitSite") }{" ↗"}
                        </a>
                    </div>
                }
            </div>
            <div class="project-body">
                <h3>{ title }</h3>
                <p class="muted small">{ language.t(&project.description_key()) }</p>
                <div class="tech-tags">
                    { for project.technologies.iter().map(|tech| html! {
                        <span key={*tech} class="tech-tag">{ *tech }</span>
                    }) }
                </div>
            </div>
        </GlassCard>
    }
}

#[function_component(WorkflowCard)]
fn workflow_card(props: &ProjectCardProps) -> Html {
    let language = use_language();
    let project = props.project;

    let onclick = project
        .link
        .map(|link| Callback::from(move |_: MouseEvent| open_in_new_tab(link)));
    let [first, second, third] = project.flow.unwrap_or(["•"; 3]);

    html! {
        <GlassCard
            class={classes!("project-card", "workflow", project.link.is_some().then(|| "linked"))}
            {onclick}
        >
            <div class="workflow-header">
                <div class="status">
                    <span class="status-dot" />
                    <span class="mono">{ language.t("portfolio.active") }</span>
                </div>
                <span class="mono faint">{ format!("ID: {}", project.id.to_uppercase()) }</span>
            </div>
            <div class="workflow-body">
                <div class="node-flow">
                    <div class="node blue">{ first }</div>
                    <div class="node-link" />
                    <div class="node purple">{ second }</div>
                    <div class="node-link" />
                    <div class="node green">{ third }</div>
                </div>
                <h3>{ language.t(&project.title_key()) }</h3>
                <p class="muted">{ language.t(&project.description_key()) }</p>
                if let Some(stats) = project.stats {
                    <div class="stats-grid">
                        <div class="stat">
                            <div class="stat-label">{"◷ "}{ language.t("portfolio.timeSaved") }</div>
                            <div class="stat-value mono">
                                { format!("{} {}", stats.hours_saved, language.t("portfolio.hours")) }
                            </div>
                        </div>
                    </div>
                }
                if project.link.is_some() {
                    <div class="workflow-link">{"↗ "}{ language.t("portfolio.viewWorkflow") }</div>
                }
            </div>
        </GlassCard>
    }
}

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let language = use_language();
    let active = use_state_eq(Category::default);

    let select = |category: Category| {
        let active = active.clone();
        Callback::from(move |_: MouseEvent| active.set(category))
    };
    let tab_class = |category: Category| classes!("tab", (*active == category).then(|| "active"));

    html! {
        <section id="portfolio" class="section portfolio">
            <div class="container">
                <div class="portfolio-header">
                    <div>
                        <h2 class="section-title">{ language.t("portfolio.title") }</h2>
                        <p class="section-subtitle">{ language.t("portfolio.subtitle") }</p>
                    </div>
                    <div class={classes!("tab-switch", (*active == Category::Automation).then(|| "right"))}>
                        <div class="tab-indicator" />
                        <button class={tab_class(Category::Web)} onclick={select(Category::Web)}>
                            { language.t("portfolio.websitesTab") }
                        </button>
                        <button class={tab_class(Category::Automation)} onclick={select(Category::Automation)}>
                            { language.t("portfolio.workflowsTab") }
                        </button>
                    </div>
                </div>
                {
                    match *active {
                        Category::Web => html! {
                            <div key="web" class="card-grid two fade-in">
                                { for projects_in(Category::Web).map(|project| html! {
                                    <WebProjectCard key={project.id} {project} />
                                }) }
                            </div>
                        },
                        Category::Automation => html! {
                            <div key="automation" class="card-grid two fade-in">
                                { for projects_in(Category::Automation).map(|project| html! {
                                    <WorkflowCard key={project.id} {project} />
                                }) }
                            </div>
                        },
                    }
                }
            </div>
        </section>
    }
}
