//! Static page content. Everything here is compiled in and never mutated.

use std::fmt;

pub const OWNER_NAME: &str = "Alex Rivera";
pub const CONTACT_EMAIL: &str = "hello@alexrivera.dev";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub live_url: &'static str,
    pub github_url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Tools,
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::Tools => "Tools",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Percentage, 0..=100.
    pub level: u8,
    pub category: SkillCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
    pub avatar: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Channel {
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub static PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "NexGen E-Commerce",
        description: "A high-performance storefront with real-time inventory and Stripe integration.",
        image: "https://picsum.photos/seed/nexgen/800/600",
        tags: &["React", "Node.js", "Stripe", "Tailwind"],
        live_url: "#",
        github_url: "#",
    },
    Project {
        id: 2,
        title: "Crypto Dashboard",
        description: "Real-time cryptocurrency tracking with interactive charts and alerts.",
        image: "https://picsum.photos/seed/crypto/800/600",
        tags: &["React", "Recharts", "CoinGecko API"],
        live_url: "#",
        github_url: "#",
    },
    Project {
        id: 3,
        title: "AI Image Studio",
        description: "DALL-E powered image generation platform with community sharing.",
        image: "https://picsum.photos/seed/ai/800/600",
        tags: &["Next.js", "OpenAI", "Cloudinary"],
        live_url: "#",
        github_url: "#",
    },
    Project {
        id: 4,
        title: "TaskFlow Manager",
        description: "A Kanban-style project management tool with drag-and-drop features.",
        image: "https://picsum.photos/seed/task/800/600",
        tags: &["React", "Firebase", "DnD"],
        live_url: "#",
        github_url: "#",
    },
];

pub static SKILLS: &[Skill] = &[
    Skill { name: "React", level: 95, category: SkillCategory::Frontend },
    Skill { name: "TypeScript", level: 90, category: SkillCategory::Frontend },
    Skill { name: "Tailwind CSS", level: 95, category: SkillCategory::Frontend },
    Skill { name: "Node.js", level: 85, category: SkillCategory::Backend },
    Skill { name: "MongoDB", level: 80, category: SkillCategory::Backend },
    Skill { name: "PostgreSQL", level: 75, category: SkillCategory::Backend },
    Skill { name: "Git", level: 90, category: SkillCategory::Tools },
    Skill { name: "Docker", level: 70, category: SkillCategory::Tools },
];

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: 1,
        name: "Sarah Johnson",
        role: "CEO at InnovateX",
        content: "Alex is an exceptional developer. His attention to detail and ability to solve complex problems is unmatched.",
        avatar: "https://i.pravatar.cc/150?u=sarah",
    },
    Testimonial {
        id: 2,
        name: "Michael Chen",
        role: "Product Manager",
        content: "The best experience I've had working with a frontend engineer. The site is fast, responsive, and beautiful.",
        avatar: "https://i.pravatar.cc/150?u=michael",
    },
];

pub static STATS: &[Stat] = &[
    Stat { label: "Years Experience", value: "5+" },
    Stat { label: "Projects Completed", value: "40+" },
    Stat { label: "Happy Clients", value: "25+" },
];

pub static CHANNELS: &[Channel] = &[
    Channel {
        label: "Email",
        value: CONTACT_EMAIL,
        href: "mailto:hello@alexrivera.dev",
        icon: "✉",
    },
    Channel {
        label: "LinkedIn",
        value: "linkedin.com/in/alexrivera",
        href: "https://linkedin.com/in/alexrivera",
        icon: "in",
    },
];

/// (aria label, devicon class, href)
pub static SOCIALS: &[(&str, &str, &str)] = &[
    ("GitHub", "devicon-github-plain", "#"),
    ("LinkedIn", "devicon-linkedin-plain", "#"),
    ("Twitter", "devicon-twitter-original", "#"),
];

const BAR_EVEN: &str = "#3b82f6";
const BAR_ODD: &str = "#a855f7";

/// Fill colour of the skills chart bar at `index`.
pub fn bar_fill(index: usize) -> &'static str {
    if index % 2 == 0 {
        BAR_EVEN
    } else {
        BAR_ODD
    }
}

/// Bar width on the chart's 0-100 domain, as a CSS percentage.
pub fn bar_width(level: u8) -> String {
    format!("{}%", level.min(100))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let project_ids = PROJECTS.iter().map(|p| p.id).collect::<HashSet<_>>();
        assert_eq!(project_ids.len(), PROJECTS.len());
        let testimonial_ids = TESTIMONIALS.iter().map(|t| t.id).collect::<HashSet<_>>();
        assert_eq!(testimonial_ids.len(), TESTIMONIALS.len());
        let skill_names = SKILLS.iter().map(|s| s.name).collect::<HashSet<_>>();
        assert_eq!(skill_names.len(), SKILLS.len());
    }

    #[test]
    fn test_content_counts() {
        assert_eq!(PROJECTS.len(), 4);
        assert_eq!(SKILLS.len(), 8);
        assert_eq!(TESTIMONIALS.len(), 2);
        assert_eq!(STATS.len(), 3);
        assert!(PROJECTS.iter().all(|p| !p.tags.is_empty()));
    }

    #[test]
    fn test_skill_levels_in_range() {
        assert!(SKILLS.iter().all(|s| s.level <= 100));
        assert_eq!(
            SKILLS
                .iter()
                .filter(|s| s.category == SkillCategory::Tools)
                .count(),
            2
        );
    }

    #[test]
    fn test_bar_fill_alternates() {
        assert_eq!(bar_fill(0), "#3b82f6");
        assert_eq!(bar_fill(1), "#a855f7");
        assert_eq!(bar_fill(6), "#3b82f6");
        assert_eq!(bar_fill(7), "#a855f7");
    }

    #[test]
    fn test_bar_width_clamped() {
        assert_eq!(bar_width(95), "95%");
        assert_eq!(bar_width(0), "0%");
        assert_eq!(bar_width(250), "100%");
    }
}
