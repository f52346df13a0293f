//! The general-purpose starter dataset: one featured project, the core
//! web stack, and the hosting integrations.

use super::{SeedDataset, SeedIntegration, SeedProject, SeedTechnology, SeedUpdate};

const ARCHITECTURE_DIAGRAM: &str = r#"graph TB
    A[User Interface] --> B[Next.js App Router]
    B --> C[API Layer]
    C --> D[PostgreSQL Database]
    C --> E[External APIs]

    subgraph Frontend
        A
        B
        F[React Components]
        G[Tailwind CSS]
    end

    subgraph Backend
        C
        H[Authentication]
        I[Data Processing]
    end

    subgraph Data
        D
        E
        J[Real-time Updates]
    end"#;

const ARCHITECTURE_CODE: &str = r#"// Architecture: Next.js 15 with App Router
// Frontend: React 19 + Tailwind CSS
// Backend: API Routes + PostgreSQL
// Auth: NextAuth.js
// Deployment: Vercel + Cloudflare

const architecture = {
  frontend: {
    framework: "Next.js 15",
    ui: "React 19",
    styling: "Tailwind CSS",
    theme: "next-themes"
  },
  backend: {
    api: "Next.js API Routes",
    database: "PostgreSQL + Supabase",
    auth: "NextAuth.js"
  },
  deployment: {
    primary: "Vercel",
    cdn: "Cloudflare Pages"
  }
};"#;

impl SeedDataset {
    /// The general-purpose dataset. Refused in production by the handler.
    pub fn general() -> Self {
        Self {
            name: "general",
            technologies: vec![
                SeedTechnology {
                    name: "Next.js",
                    slug: "nextjs",
                    category: "framework",
                    color: "#000000",
                    icon: "nextjs",
                    website_url: "https://nextjs.org",
                },
                SeedTechnology {
                    name: "TypeScript",
                    slug: "typescript",
                    category: "language",
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
                    category: "database",
                    color: "#336791",
                    icon: "postgresql",
                    website_url: "https://postgresql.org",
                },
                SeedTechnology {
                    name: "Node.js",
                    slug: "nodejs",
                    category: "backend",
                    color: "#339933",
                    icon: "nodejs",
                    website_url: "https://nodejs.org",
                },
            ],
            projects: vec![SeedProject {
                name: "Civic Pulse Dashboard",
                slug: "civic-pulse-dashboard",
                description: "A comprehensive dashboard for tracking civic engagement metrics, voter turnout, and community participation across different regions.",
                long_description: Some(
                    "The Civic Pulse Dashboard is a data visualization platform that provides insights into civic engagement patterns. It aggregates data from multiple sources to present a clear picture of democratic participation, helping organizations and researchers understand trends in voter behavior and community involvement.",
                ),
                live_url: "https://civic-pulse-dashboard.haripriya.org",
                source_url: "https://github.com/your-username/civic-pulse-dashboard",
                image_url: Some("/projects/civic-pulse.jpg"),
                status: "active",
                featured: true,
                sort_order: 1,
                architecture_diagram: Some(ARCHITECTURE_DIAGRAM),
                architecture_code: Some(ARCHITECTURE_CODE),
                tech_stack_description: Some(
                    "Built with modern web technologies focusing on performance and scalability. Uses Next.js 15 with App Router for optimal SEO and loading speeds, React 19 for the latest features, and PostgreSQL for reliable data storage.",
                ),
                technology_slugs: &["nextjs", "typescript", "react", "tailwindcss", "postgresql"],
            }],
            integrations: vec![
                SeedIntegration {
                    name: "Vercel",
                    slug: "vercel",
                    description: "Deployment and hosting platform",
                    url: "https://vercel.com",
                    icon: "vercel",
                    status: "operational",
                    version: Some("1.0.0"),
                },
                SeedIntegration {
                    name: "Cloudflare Pages",
                    slug: "cloudflare-pages",
                    description: "Edge deployment platform",
                    url: "https://pages.cloudflare.com",
                    icon: "cloudflare",
                    status: "operational",
                    version: Some("1.0.0"),
                },
                SeedIntegration {
                    name: "GitHub",
                    slug: "github",
                    description: "Source code repository",
                    url: "https://github.com",
                    icon: "github",
                    status: "operational",
                    version: None,
                },
            ],
            updates: vec![
                SeedUpdate {
                    project_slug: "civic-pulse-dashboard",
                    title: "Initial Release",
                    content: "Launched the first version of Civic Pulse Dashboard with core features including data visualization, real-time metrics, and responsive design.",
                    version: "v1.0.0",
                    update_type: "feature",
                },
                SeedUpdate {
                    project_slug: "civic-pulse-dashboard",
                    title: "Performance Optimization",
                    content: "Improved loading speeds by 40% through code splitting and image optimization.",
                    version: "v1.1.0",
                    update_type: "performance",
                },
                SeedUpdate {
                    project_slug: "civic-pulse-dashboard",
                    title: "Dark Mode Support",
                    content: "Added comprehensive dark mode support with system preference detection.",
                    version: "v1.2.0",
                    update_type: "feature",
                },
                SeedUpdate {
                    project_slug: "civic-pulse-dashboard",
                    title: "Security Enhancement",
                    content: "Updated authentication system and added rate limiting for API endpoints.",
                    version: "v1.2.1",
                    update_type: "security",
                },
            ],
        }
    }
}
