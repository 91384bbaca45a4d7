//! Static portfolio content: sections, navigation labels, skills, projects.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// Page sections in top-to-bottom order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SectionId {
    #[default]
    Home,
    Objective,
    Skills,
    Projects,
    Experience,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Home,
        SectionId::Objective,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Experience,
        SectionId::Contact,
    ];

    /// DOM id and anchor fragment.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "accueil",
            SectionId::Objective => "objectif",
            SectionId::Skills => "competences",
            SectionId::Projects => "projets",
            SectionId::Experience => "experience",
            SectionId::Contact => "contact",
        }
    }

    /// Navbar label.
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "À Propos",
            SectionId::Objective => "Objectif",
            SectionId::Skills => "Compétences",
            SectionId::Projects => "Projets",
            SectionId::Experience => "Expérience",
            SectionId::Contact => "Contact",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectKind {
    Ai,
    Web,
    Other,
}

#[derive(Clone, Copy, Debug)]
pub struct Project {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub github_url: &'static str,
    pub live_url: Option<&'static str>,
    pub kind: ProjectKind,
}

impl Project {
    /// Whether the card offers the simulated agent chat.
    pub fn has_agent_demo(&self) -> bool {
        self.kind == ProjectKind::Ai
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: "ai-agent",
        name: "Agent IA Persuasif",
        description: "Un agent conversationnel expérimental utilisant des techniques de PNL pour la persuasion éthique. (Simulation)",
        tags: &["Python", "TypeScript", "IA", "PNL"],
        github_url: "https://github.com/SticksOnTheBeach/ai-agent-demo",
        live_url: None,
        kind: ProjectKind::Ai,
    },
    Project {
        id: "rust-scanner",
        name: "Network Sniffer en Rust",
        description: "Un outil en ligne de commande pour analyser le trafic réseau, développé pour sa performance et sa sécurité.",
        tags: &["Rust", "Réseaux", "Cybersécurité", "CLI"],
        github_url: "https://github.com/SticksOnTheBeach/rust-sniffer",
        live_url: None,
        kind: ProjectKind::Other,
    },
    Project {
        id: "portfolio",
        name: "Ce Portfolio",
        description: "Le site sur lequel vous naviguez actuellement, construit avec Rust, Leptos et WebAssembly.",
        tags: &["Rust", "Leptos", "WebAssembly", "CSS"],
        github_url: "https://github.com/SticksOnTheBeach/portfolio",
        live_url: Some("#accueil"),
        kind: ProjectKind::Web,
    },
    Project {
        id: "java-bank",
        name: "Simulation Bancaire Java",
        description: "Application de bureau simulant un système de gestion bancaire, avec gestion des comptes et transactions.",
        tags: &["Java", "Swing", "POO"],
        github_url: "https://github.com/SticksOnTheBeach/java-bank-sim",
        live_url: None,
        kind: ProjectKind::Other,
    },
];

#[derive(Clone, Copy, Debug)]
pub struct SkillGroup {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "Cybersécurité",
        items: &[
            "Analyse de malwares (basique)",
            "Scan de vulnérabilités",
            "Configuration de pare-feu",
            "Principes de cryptographie",
            "OSINT",
        ],
    },
    SkillGroup {
        title: "Développement",
        items: &["C#", "Python", "Rust", "TypeScript", "Java", "HTML", "CSS", "React", "Node.js"],
    },
    SkillGroup {
        title: "Réseaux",
        items: &["Modèle OSI", "Protocoles TCP/IP", "Configuration de VLAN", "Wireshark", "Subnetting"],
    },
    SkillGroup {
        title: "Outils & IDEs",
        items: &["JetBrains Rider", "PyCharm", "CLion", "Visual Studio", "VS Code", "IntelliJ IDEA"],
    },
];

pub const OWNER_HANDLE: &str = "SticksOnTheBeach";
pub const GITHUB_PROFILE_URL: &str = "https://github.com/SticksOnTheBeach";
