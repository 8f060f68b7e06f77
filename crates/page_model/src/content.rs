//! Inline render data for the four content sections.
//!
//! All of this is static presentation data. Nothing in the scroll-spy core
//! reads it; it exists so the page renderer has something real to lay out.

/// The about-section hero block.
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// One featured project card.
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub demo: &'static str,
    pub github: &'static str,
    /// Accent color for the card's image placeholder.
    pub color: &'static str,
}

/// One skill row with a proficiency bar.
pub struct Skill {
    pub name: &'static str,
    /// Proficiency percentage, 0..=100.
    pub level: u8,
    pub icon: &'static str,
}

/// One social link in the contact section.
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Alex Carter",
    title: "Full-Stack Web Developer",
    description: "I craft beautiful, functional web experiences with modern technologies. \
        With 5+ years of experience, I specialize in building scalable applications \
        that solve real-world problems. My passion lies in creating intuitive interfaces \
        and writing clean, maintainable code.",
};

pub const PROJECTS: &[Project] = &[
    Project {
        title: "E-Commerce Platform",
        description: "A full-featured online shopping platform with payment integration, \
            inventory management, and real-time analytics.",
        tech: &["Next.js", "TypeScript", "Stripe", "PostgreSQL"],
        demo: "#",
        github: "#",
        color: "#3b82f6",
    },
    Project {
        title: "Task Management App",
        description: "Collaborative task management tool with drag-and-drop, real-time \
            updates, and team communication features.",
        tech: &["React", "Node.js", "Socket.io", "MongoDB"],
        demo: "#",
        github: "#",
        color: "#8b5cf6",
    },
    Project {
        title: "Weather Dashboard",
        description: "Beautiful weather application with location-based forecasts, \
            interactive maps, and customizable alerts.",
        tech: &["Vue.js", "OpenWeather API", "Chart.js"],
        demo: "#",
        github: "#",
        color: "#06b6d4",
    },
    Project {
        title: "Portfolio CMS",
        description: "Headless CMS for creative professionals to showcase their work \
            with customizable templates and SEO optimization.",
        tech: &["Next.js", "Sanity.io", "Tailwind CSS"],
        demo: "#",
        github: "#",
        color: "#f59e0b",
    },
    Project {
        title: "Fitness Tracker",
        description: "Health and fitness tracking app with workout plans, progress \
            visualization, and nutrition logging.",
        tech: &["React Native", "Firebase", "Redux"],
        demo: "#",
        github: "#",
        color: "#10b981",
    },
    Project {
        title: "AI Chat Assistant",
        description: "Intelligent chatbot with natural language processing for customer \
            support automation and FAQ handling.",
        tech: &["Python", "FastAPI", "OpenAI", "React"],
        demo: "#",
        github: "#",
        color: "#ec4899",
    },
];

pub const SKILLS: &[Skill] = &[
    Skill { name: "JavaScript/TypeScript", level: 95, icon: "JS" },
    Skill { name: "React & Next.js", level: 90, icon: "R" },
    Skill { name: "Node.js & Express", level: 88, icon: "N" },
    Skill { name: "HTML & CSS", level: 95, icon: "H" },
    Skill { name: "Python", level: 82, icon: "P" },
    Skill { name: "SQL & NoSQL", level: 85, icon: "DB" },
    Skill { name: "Git & CI/CD", level: 90, icon: "G" },
    Skill { name: "AWS & Cloud", level: 78, icon: "C" },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { name: "GitHub", url: "https://github.com" },
    SocialLink { name: "LinkedIn", url: "https://linkedin.com" },
    SocialLink { name: "Twitter", url: "https://twitter.com" },
];

pub const CONTACT_BLURB: &str = "I'm always open to discussing new projects, creative \
    ideas, or opportunities to be part of your vision.";

#[cfg(test)]
mod tests {
    use super::{PROJECTS, SKILLS};

    #[test]
    fn skill_levels_are_percentages() {
        assert!(SKILLS.iter().all(|skill| skill.level <= 100));
    }

    #[test]
    fn every_project_names_its_stack() {
        assert!(PROJECTS.iter().all(|project| !project.tech.is_empty()));
    }
}
