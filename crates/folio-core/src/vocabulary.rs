//! Closed category vocabularies used to tag and filter projects.
//!
//! Membership in these sets is the only thing that makes a value "valid".
//! Every vocabulary serializes as its canonical spelling (`"Next.js"`,
//! `"Full Stack"`, `"AI/Machine Learning"`), which is also what the site shows.
//!
//! Two lookups are provided:
//! - `from_name()` is exact and is what the migrator uses.
//! - `FromStr` ignores ASCII case and surrounding whitespace, for user input.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every value, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Canonical spelling.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }

            /// Exact lookup by canonical spelling.
            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|value| value.as_str() == name)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|value| value.as_str().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| CoreError::UnknownVocabulary {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Technology
// ---------------------------------------------------------------------------

vocabulary! {
    /// Approved technology names. Anything else is dropped during migration.
    Technology, "technology" {
        // Frontend frameworks & libraries
        React => "React",
        NextJs => "Next.js",
        VueJs => "Vue.js",
        Angular => "Angular",
        Svelte => "Svelte",
        TypeScript => "TypeScript",
        JavaScript => "JavaScript",
        HtmlCss => "HTML/CSS",
        // Styling & UI
        TailwindCss => "Tailwind CSS",
        ShadcnUi => "shadcn/ui",
        RadixUi => "Radix UI",
        FramerMotion => "Framer Motion",
        CssModules => "CSS Modules",
        StyledComponents => "Styled Components",
        // Backend & APIs
        NodeJs => "Node.js",
        ExpressJs => "Express.js",
        FastApi => "FastAPI",
        Django => "Django",
        Flask => "Flask",
        GraphQl => "GraphQL",
        RestApi => "REST API",
        Trpc => "tRPC",
        // Databases
        PostgreSql => "PostgreSQL",
        MySql => "MySQL",
        MongoDb => "MongoDB",
        Redis => "Redis",
        Supabase => "Supabase",
        Firebase => "Firebase",
        Prisma => "Prisma",
        DrizzleOrm => "Drizzle ORM",
        // Cloud & infrastructure
        Aws => "AWS",
        Vercel => "Vercel",
        Netlify => "Netlify",
        Docker => "Docker",
        Kubernetes => "Kubernetes",
        AwsAmplify => "AWS Amplify",
        AwsBedrock => "AWS Bedrock",
        AwsLambda => "AWS Lambda",
        // AI & machine learning
        OpenAi => "OpenAI",
        AiSdk => "AI SDK",
        LangChain => "LangChain",
        HuggingFace => "Hugging Face",
        TensorFlow => "TensorFlow",
        PyTorch => "PyTorch",
        // Mobile
        ReactNative => "React Native",
        Flutter => "Flutter",
        Swift => "Swift",
        Kotlin => "Kotlin",
        // Game development
        Unity => "Unity",
        CSharp => "C#",
        UnrealEngine => "Unreal Engine",
        Godot => "Godot",
        // DevTools & testing
        Git => "Git",
        GitHub => "GitHub",
        GitHubActions => "GitHub Actions",
        Jest => "Jest",
        Vitest => "Vitest",
        Cypress => "Cypress",
        Playwright => "Playwright",
        EsLint => "ESLint",
        Prettier => "Prettier",
        // Other tools
        Figma => "Figma",
        AdobeCreativeSuite => "Adobe Creative Suite",
        Blender => "Blender",
        Postman => "Postman",
    }
}

// ---------------------------------------------------------------------------
// SkillCategory
// ---------------------------------------------------------------------------

vocabulary! {
    /// Broad skill areas a project demonstrates.
    SkillCategory, "skill category" {
        Frontend => "Frontend Development",
        Backend => "Backend Development",
        FullStack => "Full Stack Development",
        AiMachineLearning => "AI/Machine Learning",
        DevOpsInfrastructure => "DevOps/Infrastructure",
        Mobile => "Mobile Development",
        Game => "Game Development",
        UiUxDesign => "UI/UX Design",
        DataEngineering => "Data Engineering",
        Api => "API Development",
    }
}

// ---------------------------------------------------------------------------
// RoleType
// ---------------------------------------------------------------------------

vocabulary! {
    /// Canonical role tokens a project can be credited with.
    RoleType, "role" {
        Frontend => "Frontend",
        Backend => "Backend",
        FullStack => "Full Stack",
        AiEngineer => "AI Engineer",
        DevOps => "DevOps",
        Mobile => "Mobile",
        GameDeveloper => "Game Developer",
        Designer => "Designer",
        DataEngineer => "Data Engineer",
        DevTools => "DevTools",
    }
}

// ---------------------------------------------------------------------------
// DomainCategory
// ---------------------------------------------------------------------------

vocabulary! {
    /// Business or problem domain of a project.
    DomainCategory, "domain" {
        ECommerce => "E-commerce",
        Education => "Education",
        Healthcare => "Healthcare",
        Finance => "Finance",
        Entertainment => "Entertainment",
        Productivity => "Productivity",
        Social => "Social",
        Enterprise => "Enterprise",
        OpenSource => "Open Source",
        Personal => "Personal",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
