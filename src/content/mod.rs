//! The literal page dataset.
//!
//! Every piece of text and every link the site renders lives here as a
//! `'static` literal. The dataset is constructed once at startup, checked by
//! [`Profile::validate`], and never mutated afterwards. Editing this file is
//! how the page content changes; nothing is loaded from disk or network.

use crate::domain::{EducationEntry, ExperienceRole, Profile, Project, QuickStat, SocialLink};

/// Builds the full portfolio dataset.
pub fn profile() -> Profile {
    Profile {
        name: "Dhairya Joshi",
        tagline: "Software Engineer — Systems, Distributed Systems & Backend",
        headline: "Hi — I'm Dhairya.",
        intro: "I love going deep into the tools, languages, and systems I use every day — \
                understanding how they work under the hood, why they are designed the way they \
                are, and what trade‑offs shape them. Whenever I learn a new technology, I try to \
                recreate my own minimal version of it: whether it's a message queue, a key‑value \
                store, a reverse proxy, or an entire HTTP framework. Building low‑level systems \
                helps me understand concepts conceptually, not just superficially, and that \
                curiosity drives almost everything I build.",
        badges: vec![
            "Go",
            "Rust",
            "Python",
            "Postgresql",
            "Distributed Systems",
            "Kubernetes",
            "Django",
            "FastAPI",
        ],
        initials: "DJ",
        role: "Software Engineer",
        location: "Hyderabad",
        stats: vec![
            QuickStat {
                figure: "3+",
                caption: "Years coding projects & systems",
                href: None,
            },
            QuickStat {
                figure: "2+",
                caption: "Production-grade backend projects",
                href: None,
            },
            QuickStat {
                figure: "700+",
                caption: "LeetCode questions solved",
                href: Some("https://leetcode.com/u/dhairyajoshi/"),
            },
        ],
        projects_blurb: "Systems & backend projects focused on reliability, scalability and \
                         low-level networking.",
        projects: vec![
            Project {
                title: "GoMQ — Lightweight Message Queue",
                summary: "Fully custom AMQP-style message broker supporting durable queues, \
                          multi-consumer fanout, manual acks, dead-lettering, message \
                          requeueing, and fully async goroutine-based dispatch. Implements \
                          backpressure, fair delivery, and a TCP-based wire protocol.",
                tech: vec!["Go", "Concurrency", "TCP", "Systems Design"],
                repo_url: "https://github.com/dhairyajoshi/gomq",
                demo_url: None,
            },
            Project {
                title: "P2P Encrypted Communication",
                summary: "Peer discovery server + direct encrypted peer‑to‑peer communication \
                          using asymmetric crypto. Includes handshake protocol, public‑key \
                          exchange, NAT-friendly connection bootstrapping, and E2E message \
                          encryption with no central relay.",
                tech: vec!["Go", "Cryptography", "P2P Networking"],
                repo_url: "https://github.com/dhairyajoshi/p2p",
                demo_url: None,
            },
            Project {
                title: "Reverse Proxy & Load Balancer",
                summary: "Production-grade reverse proxy implementing round‑robin scheduling, \
                          health checks, retry logic, failover, and connection pooling. Uses \
                          goroutines for high concurrency and low-latency request forwarding.",
                tech: vec!["Go", "Load Balancing", "Networking"],
                repo_url: "https://github.com/dhairyajoshi/reverse-proxy",
                demo_url: None,
            },
            Project {
                title: "RustedMem — Redis-like KV Store",
                summary: "In-memory Redis-style key-value database built in Rust with its own \
                          TCP server, command parser, hashmap-based storage engine, \
                          multi-threaded concurrency model, and minimal RESP-inspired protocol.",
                tech: vec!["Rust", "Low-level Systems", "Databases"],
                repo_url: "https://github.com/dhairyajoshi/rustedmem",
                demo_url: None,
            },
            Project {
                title: "HTTPed — Async HTTP Framework",
                summary: "Custom async HTTP framework from scratch: router, middleware \
                          pipeline, controller abstractions, TCP‑level request parsing, and \
                          async executor built on top of Rust's futures.",
                tech: vec!["Rust", "Async Runtime", "TCP/HTTP"],
                repo_url: "https://github.com/dhairyajoshi/httped",
                demo_url: None,
            },
            Project {
                title: "Chess (Flutter)",
                summary: "A complete chess game implemented in Flutter with full move \
                          validation, piece logic, board rendering, turn management, and \
                          check/checkmate detection. Features animations and a clean \
                          mobile‑friendly UI.",
                tech: vec!["Flutter", "Dart", "Game Logic"],
                repo_url: "https://github.com/dhairyajoshi/chess",
                demo_url: Some("https://chess-dsfy.onrender.com/"),
            },
            Project {
                title: "Minesweeper (Flutter)",
                summary: "Classic Minesweeper game recreated with Flutter featuring recursive \
                          reveal algorithm, flagging system, board generation logic, and \
                          adaptive grid UI for web and mobile.",
                tech: vec!["Flutter", "Dart", "Game Development"],
                repo_url: "https://github.com/dhairyajoshi/minesweeper",
                demo_url: Some("https://minesweeper-l7da.onrender.com/"),
            },
            Project {
                title: "BFS-visualizer (Flutter)",
                summary: "Visualizer for Breadth-First Search (BFS) algorithm implemented in \
                          Flutter. Place start and end nodes, add walls, and watch the \
                          algorithm explore the grid in real-time with animated steps.",
                tech: vec!["Flutter", "Dart", "DSA"],
                repo_url: "https://github.com/dhairyajoshi/BFS-Visualizer",
                demo_url: Some("https://bfs-visualizer.onrender.com/#/"),
            },
        ],
        experience: ExperienceRole {
            role: "Software Engineer — Solytics Partners",
            tenure: "Dec 2023 — Present • Pune",
            highlights: vec![
                "Migrated large-scale Django services to FastAPI, reducing response latency \
                 and enabling async I/O for high‑throughput workloads.",
                "Refactored major backend components, cutting cloud infrastructure cost by \
                 90%+ via optimized compute usage, caching, and DB query reductions.",
                "Built end-to-end CI/CD pipelines with containerized test suites, automated \
                 QA, blue/green deployments, and Kubernetes rollout strategies.",
                "Designed LLM-powered transaction graph analysis: natural-language → \
                 graph-query engine enabling bankers to explore customer risk patterns.",
                "Implemented core modules for SAMS & TMS with TDD, improving reliability and \
                 reducing production issues.",
            ],
            recent_work: vec![
                "LLM-powered linked-network analysis for TMS (natural-language queries over \
                 transaction graphs)",
                "FastAPI migration and performance-focused refactors across services",
            ],
        },
        skills: vec![
            "Go",
            "Rust",
            "Python",
            "FastAPI",
            "Kubernetes",
            "AWS",
            "Postgres",
            "Docker",
            "Django",
            "Node.js",
        ],
        links: vec![
            SocialLink {
                label: "GitHub",
                url: "https://github.com/dhairyajoshi",
            },
            SocialLink {
                label: "Kaggle",
                url: "https://kaggle.com/dhairyajoshi",
            },
            SocialLink {
                label: "LinkedIn",
                url: "https://linkedin.com/in/dhairya-joshi",
            },
            SocialLink {
                label: "LeetCode",
                url: "https://leetcode.com/dhairyajoshi",
            },
        ],
        education: vec![
            EducationEntry {
                degree: "B.Tech in Computer Science & Engineering",
                school: "VSSUT, Burla",
                date: "Nov 2020 — May 2024",
                note: "CGPA: 8.54",
            },
            EducationEntry {
                degree: "Class XII",
                school: "St. Xavier's High School, Khandagiri",
                date: "June 2020",
                note: "94.4%",
            },
            EducationEntry {
                degree: "Class X",
                school: "St. Xavier's High School, Khandagiri",
                date: "June 2018",
                note: "93%",
            },
        ],
        coursework: vec![
            "Data Structures and Algorithms",
            "Object-Oriented Programming",
            "Software Engineering",
            "Operating Systems",
            "Microprocessors & Microcontrollers",
            "Database Management Systems",
        ],
        certifications: vec![
            "Introduction to Machine Learning (Kaggle)",
            "Intermediate Machine Learning (Kaggle)",
            "Introduction to Deep Learning (Kaggle)",
            "Programming Essentials in Python",
            "CCNA: Introduction to Networks",
            "Cybersecurity Essentials",
        ],
        achievements: vec![
            "Solved 700+ LeetCode questions — https://leetcode.com/u/dhairyajoshi/",
            "Built multiple production-ready backend systems and infra tools",
            "Strong problem-solving foundation with consistent algorithmic practice",
        ],
        contact_pitch: "Open to backend, infra, and systems roles. Available for remote and \
                        onsite work.",
        email: "joshidhairaya2002@gmail.com",
        github_url: "https://github.com/dhairyajoshi",
        resume_href: "/resume.pdf",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_passes_validation() {
        profile().validate().expect("authored dataset must be valid");
    }

    #[test]
    fn test_dataset_shape() {
        let profile = profile();
        assert_eq!(profile.projects.len(), 8);
        assert_eq!(profile.education.len(), 3);
        assert_eq!(profile.links.len(), 4);
        assert_eq!(profile.stats.len(), 3);
        assert_eq!(
            profile.projects.iter().filter(|p| p.demo_url.is_some()).count(),
            3
        );
    }

    #[test]
    fn test_contact_literals() {
        let profile = profile();
        assert_eq!(profile.email, "joshidhairaya2002@gmail.com");
        assert_eq!(profile.resume_href, "/resume.pdf");
    }
}
