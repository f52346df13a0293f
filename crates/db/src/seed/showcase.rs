//! The showcase dataset: the two-project portfolio (Civic Pulse and the
//! dashboard itself) with project-specific infrastructure and a changelog
//! drawn from the dashboard's own release history.

use super::{SeedDataset, SeedIntegration, SeedProject, SeedTechnology, SeedUpdate};

const DASHBOARD_ARCHITECTURE: &str = r#"graph LR
    A[Next.js Frontend] --> B[API Routes]
    B --> C[Supabase Database]
    A --> D[NextAuth]
    A --> E[Mermaid]
    C --> F[Projects]
    C --> G[Technologies]
    C --> H[Updates]
    I[Cloudflare] --> A"#;

const CIVIC_PULSE_ARCHITECTURE: &str = r#"graph TB
    A[React Frontend] --> B[Node.js API]
    B --> C[MongoDB Database]
    A --> D[Chart.js Visualizations]
    B --> E[Data Processing Engine]
    E --> F[External APIs]

    subgraph Frontend
        A
        D
        G[Material-UI]
    end

    subgraph Backend
        B
        E
        H[Express Server]
    end

    subgraph Data
        C
        F
        I[Real-time Updates]
    end"#;

impl SeedDataset {
    /// The showcase dataset served by the public demo.
    pub fn showcase() -> Self {
        Self {
            name: "showcase",
            technologies: vec![
                SeedTechnology {
                    name: "Next.js",
                    slug: "nextjs",
                    category: "frontend",
                    color: "#000000",
                    icon: "nextjs",
                    website_url: "https://nextjs.org",
                },
                SeedTechnology {
                    name: "TypeScript",
                    slug: "typescript",
                    category: "frontend",
                    color: "#3178C6",
                    icon: "typescript",
                    website_url: "https://typescriptlang.org",
                },
                SeedTechnology {
                    name: "React",
                    slug: "react",
                    category: "frontend",
                    color: "#61DAFB",
                    icon: "react",
                    website_url: "https://reactjs.org",
                },
                SeedTechnology {
                    name: "Tailwind CSS",
                    slug: "tailwindcss",
                    category: "frontend",
                    color: "#06B6D4",
                    icon: "tailwindcss",
                    website_url: "https://tailwindcss.com",
                },
                SeedTechnology {
                    name: "PostgreSQL",
                    slug: "postgresql",
                    category: "backend",
                    color: "#336791",
                    icon: "postgresql",
                    website_url: "https://postgresql.org",
                },
                SeedTechnology {
                    name: "Supabase",
                    slug: "supabase",
                    category: "backend",
                    color: "#3ECF8E",
                    icon: "supabase",
                    website_url: "https://supabase.com",
                },
                SeedTechnology {
                    name: "NextAuth.js",
                    slug: "nextauth",
                    category: "backend",
                    color: "#7C3AED",
                    icon: "nextauth",
                    website_url: "https://next-auth.js.org",
                },
                SeedTechnology {
                    name: "Mermaid",
                    slug: "mermaid",
                    category: "frontend",
                    color: "#2563EB",
                    icon: "mermaid",
                    website_url: "https://mermaid.js.org",
                },
                SeedTechnology {
                    name: "Cloudflare",
                    slug: "cloudflare",
                    category: "devops",
                    color: "#1E40AF",
                    icon: "cloudflare",
                    website_url: "https://cloudflare.com",
                },
            ],
            projects: vec![
                SeedProject {
                    name: "Civic Pulse",
                    slug: "civic-pulse",
                    description: "A comprehensive dashboard for tracking civic engagement metrics, voter turnout, and community participation across different regions.",
                    long_description: Some(
                        "Civic Pulse is a data visualization platform that provides insights into civic engagement patterns. It aggregates data from multiple sources to present a clear picture of democratic participation, helping organizations and researchers understand trends in voter behavior and community involvement across various demographics and geographic regions.",
                    ),
                    live_url: "https://civic-pulse-dashboard.haripriya.org",
                    source_url: "https://github.com/hariship/civic-pulse",
                    image_url: Some("/projects/civic-pulse.jpg"),
                    status: "active",
                    featured: true,
                    sort_order: 1,
                    architecture_diagram: Some(CIVIC_PULSE_ARCHITECTURE),
                    architecture_code: None,
                    tech_stack_description: Some(
                        "Data-driven civic engagement platform built with React and Node.js. Features interactive Chart.js visualizations, Material-UI components, and MongoDB for scalable data storage. Includes real-time data processing engine for aggregating civic metrics from multiple sources and APIs.",
                    ),
                    // "nodejs" is not part of this dataset's technologies;
                    // the runner skips unresolved slugs.
                    technology_slugs: &["react", "nodejs", "typescript", "tailwindcss"],
                },
                SeedProject {
                    name: "Apps Dashboard",
                    slug: "apps-dashboard",
                    description: "A modern portfolio dashboard for managing and showcasing development projects with interactive architecture diagrams and technology stack visualization.",
                    long_description: Some(
                        "The Apps Dashboard is a full-stack portfolio management platform built with Next.js 15 and React 19. It features a Star Trek LCARS-inspired design with dark/light mode support, interactive Mermaid diagrams for system architecture visualization, and comprehensive project management capabilities. The dashboard integrates with PostgreSQL via Supabase for data persistence and includes NextAuth.js for authentication.",
                    ),
                    live_url: "http://localhost:3000",
                    source_url: "https://github.com/hariship/apps",
                    image_url: Some("/projects/apps-dashboard.jpg"),
                    status: "active",
                    featured: true,
                    sort_order: 2,
                    architecture_diagram: Some(DASHBOARD_ARCHITECTURE),
                    architecture_code: None,
                    tech_stack_description: Some(
                        "Portfolio dashboard showcasing development projects with real-time GitHub integration. Built with Next.js 15 App Router, React 19, and TypeScript. Features LCARS-inspired design with Tailwind CSS, dynamic Mermaid.js architecture diagrams, and live commit feeds from GitHub API. Data layer powered by PostgreSQL via Supabase, with NextAuth.js for authentication. Deployed on Cloudflare Pages.",
                    ),
                    technology_slugs: &[
                        "nextjs",
                        "typescript",
                        "react",
                        "tailwindcss",
                        "postgresql",
                        "supabase",
                        "nextauth",
                        "mermaid",
                        "cloudflare",
                    ],
                },
            ],
            integrations: vec![
                SeedIntegration {
                    name: "Cloudflare Pages",
                    slug: "cloudflare-pages",
                    description: "Frontend deployment and CDN",
                    url: "https://pages.cloudflare.com",
                    icon: "cloudflare",
                    status: "operational",
                    version: Some("1.0.0"),
                },
                SeedIntegration {
                    name: "Supabase",
                    slug: "supabase",
                    description: "PostgreSQL database hosting",
                    url: "https://supabase.com",
                    icon: "supabase",
                    status: "operational",
                    version: Some("2.0.0"),
                },
                SeedIntegration {
                    name: "GitHub",
                    slug: "github",
                    description: "Source code repository",
                    url: "https://github.com/hariship/apps",
                    icon: "github",
                    status: "operational",
                    version: None,
                },
            ],
            updates: vec![
                SeedUpdate {
                    project_slug: "apps-dashboard",
                    title: "Initial Dashboard Setup with Star Trek Theme",
                    content: "Set up the foundational dashboard architecture with Star Trek LCARS-inspired theme, implemented the basic layout structure and established the design system with earthy color palette.",
                    version: "v1.0.0",
                    update_type: "feature",
                },
                SeedUpdate {
                    project_slug: "apps-dashboard",
                    title: "React 19 Compatibility Issues Fixed",
                    content: "Resolved compatibility issues with Framer Motion and React 19, updated all animation components to work seamlessly with the latest React version and improved component lifecycle management.",
                    version: "v1.1.0",
                    update_type: "bugfix",
                },
                SeedUpdate {
                    project_slug: "apps-dashboard",
                    title: "Styling and UI Layout Improvements",
                    content: "Enhanced UI layout responsiveness, fixed styling inconsistencies across different screen sizes, and improved the overall visual hierarchy of dashboard components.",
                    version: "v1.2.0",
                    update_type: "feature",
                },
                SeedUpdate {
                    project_slug: "apps-dashboard",
                    title: "Tailwind CSS Loading Issues Resolved",
                    content: "Fixed critical Tailwind CSS loading problems that were causing style inconsistencies, optimized CSS bundle size, and improved initial page load performance.",
                    version: "v1.2.1",
                    update_type: "bugfix",
                },
                SeedUpdate {
                    project_slug: "apps-dashboard",
                    title: "Complete Light/Dark Theme Support",
                    content: "Implemented comprehensive light and dark theme switching functionality with proper color scheme management, theme persistence, and seamless transitions between modes.",
                    version: "v1.3.0",
                    update_type: "feature",
                },
            ],
        }
    }
}
