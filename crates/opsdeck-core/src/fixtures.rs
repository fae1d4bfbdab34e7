//! Demo data factories.
//!
//! Everything the console shows comes from these fixtures. They are rebuilt
//! on every launch and mutated only in memory; nothing is written back.

use chrono::{Duration, Utc};

use crate::types::{
    AddOnPack, ChatMessage, Credential, CredentialStatus, Difficulty, DocLink, FaqEntry,
    FeedbackItem, FeedbackKind, FeedbackStatus, Integration, Notification, NotificationKind,
    PricingPlan, ServiceStatus, StatCard, StepStatus, Template, Workflow, WorkflowStatus,
    WorkflowStep,
};

// ---------------------------------------------------------------------------
// Pipeline steps (workflow detail view)
// ---------------------------------------------------------------------------

pub fn pipeline_steps() -> Vec<WorkflowStep> {
    vec![
        WorkflowStep {
            name: "GitHub".into(),
            status: StepStatus::Success,
            commands: vec![
                "git clone https://github.com/user/react-app.git".into(),
                "git checkout main".into(),
                "git pull origin main".into(),
                "git status".into(),
            ],
            logs: vec![
                "Successfully cloned repository".into(),
                "Switched to branch 'main'".into(),
                "Already up to date".into(),
                "Working tree clean".into(),
            ],
            metadata: vec![
                ("Repository".into(), "user/react-app".into()),
                ("Branch".into(), "main".into()),
                ("Last Commit".into(), "a1b2c3d".into()),
                ("Author".into(), "John Doe".into()),
            ],
        },
        WorkflowStep {
            name: "Docker".into(),
            status: StepStatus::Success,
            commands: vec![
                "docker build -t react-app:latest .".into(),
                "docker tag react-app:latest registry.io/react-app:v1.0".into(),
                "docker push registry.io/react-app:v1.0".into(),
                "docker images".into(),
            ],
            logs: vec![
                "Building Docker image...".into(),
                "Successfully built image".into(),
                "Tagged react-app:latest".into(),
                "Pushed to registry successfully".into(),
            ],
            metadata: vec![
                ("Image ID".into(), "sha256:abc123...".into()),
                ("Size".into(), "245 MB".into()),
                ("Registry".into(), "registry.io".into()),
                ("Tag".into(), "v1.0".into()),
            ],
        },
        WorkflowStep {
            name: "Jenkins".into(),
            status: StepStatus::Running { progress: 65 },
            commands: vec![
                "jenkins-cli build ReactApp-Pipeline".into(),
                "jenkins-cli console ReactApp-Pipeline #42".into(),
                "jenkins-cli get-job ReactApp-Pipeline".into(),
            ],
            logs: vec![
                "Started build #42".into(),
                "Running unit tests...".into(),
                "Tests passed (18/18)".into(),
                "Starting integration tests...".into(),
            ],
            metadata: vec![
                ("Build Number".into(), "#42".into()),
                ("Started By".into(), "SCM Change".into()),
                ("Duration".into(), "4m 32s".into()),
                ("Workspace".into(), "/var/jenkins/workspace/ReactApp".into()),
            ],
        },
        WorkflowStep {
            name: "Terraform".into(),
            status: StepStatus::Error {
                message: "Error acquiring the state lock: ConditionalCheckFailedException".into(),
            },
            commands: vec![
                "terraform init".into(),
                "terraform plan -out=tfplan".into(),
                "terraform apply tfplan".into(),
            ],
            logs: vec![
                "Initializing the backend...".into(),
                "Acquiring state lock. This may take a few moments...".into(),
                "Error acquiring the state lock".into(),
            ],
            metadata: vec![
                ("Workspace".into(), "production".into()),
                ("Backend".into(), "s3".into()),
                ("Lock ID".into(), "9f2c1e4a".into()),
            ],
        },
        WorkflowStep {
            name: "Kubernetes".into(),
            status: StepStatus::Pending,
            commands: vec![
                "kubectl apply -f deployment.yaml".into(),
                "kubectl apply -f service.yaml".into(),
                "kubectl get pods -n production".into(),
                "kubectl rollout status deployment/react-app".into(),
            ],
            logs: vec![
                "Waiting for Jenkins build to complete...".into(),
                "Deployment queued".into(),
                "Waiting for Docker image".into(),
            ],
            metadata: vec![
                ("Namespace".into(), "production".into()),
                ("Replicas".into(), "3".into()),
                ("Service Type".into(), "LoadBalancer".into()),
                ("Port".into(), "80".into()),
            ],
        },
    ]
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

pub fn dashboard_stats() -> Vec<StatCard> {
    vec![
        StatCard { title: "Active Workflows".into(), value: "12".into(), change: "+3".into() },
        StatCard { title: "Deployments Today".into(), value: "24".into(), change: "+8".into() },
        StatCard { title: "Success Rate".into(), value: "98.5%".into(), change: "+2.1%".into() },
        StatCard { title: "Avg Deploy Time".into(), value: "3m 42s".into(), change: "-1m".into() },
    ]
}

pub fn dashboard_workflows() -> Vec<Workflow> {
    vec![
        Workflow {
            id: 1,
            name: "Production Deploy - Node.js API".into(),
            status: WorkflowStatus::Running { progress: 65 },
            duration: "4m 32s".into(),
            steps: vec!["Build".into(), "Test".into(), "Deploy".into(), "Verify".into()],
        },
        Workflow {
            id: 2,
            name: "Database Migration - PostgreSQL".into(),
            status: WorkflowStatus::Completed,
            duration: "2m 15s".into(),
            steps: vec!["Backup".into(), "Migrate".into(), "Verify".into(), "Cleanup".into()],
        },
        Workflow {
            id: 3,
            name: "Security Scan - Docker Images".into(),
            status: WorkflowStatus::Pending,
            duration: "0m 0s".into(),
            steps: vec!["Scan".into(), "Analyze".into(), "Report".into(), "Remediate".into()],
        },
    ]
}

pub fn quick_actions() -> Vec<&'static str> {
    vec![
        "Deploy Latest Build",
        "Scale Services",
        "Backup Database",
        "Security Scan",
    ]
}

// ---------------------------------------------------------------------------
// Integration catalog
// ---------------------------------------------------------------------------

fn tool(
    id: &str,
    name: &str,
    description: &str,
    category: &str,
    connected: bool,
    icon: &'static str,
    color: (u8, u8, u8),
) -> Integration {
    Integration {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        category: category.into(),
        connected,
        icon,
        color,
    }
}

pub fn integration_catalog() -> Vec<Integration> {
    vec![
        // GitOps
        tool("argocd", "ArgoCD", "Declarative GitOps continuous delivery tool for Kubernetes", "GitOps", true, "^", (0xEF, 0x7B, 0x4D)),
        tool("flux", "Flux", "GitOps toolkit for keeping Kubernetes clusters in sync", "GitOps", false, "~", (0x32, 0x6C, 0xE5)),
        tool("tekton", "Tekton", "Cloud native solution for building CI/CD systems", "GitOps", false, "*", (0xFD, 0x49, 0x5C)),
        tool("gitops-engine", "GitOps Engine", "Reusable library for building GitOps solutions", "GitOps", false, "#", (0xFF, 0x6B, 0x35)),
        // Infrastructure
        tool("terraform", "Terraform", "Infrastructure as Code tool for building and managing infrastructure", "Infrastructure", true, "=", (0x7B, 0x42, 0xBC)),
        tool("pulumi", "Pulumi", "Modern infrastructure as code platform using familiar languages", "Infrastructure", false, "*", (0x8A, 0x3F, 0xFC)),
        tool("ansible", "Ansible", "Automation tool for configuration management and deployment", "Infrastructure", false, "A", (0xEE, 0x00, 0x00)),
        tool("cloudformation", "CloudFormation", "AWS service for modeling and setting up AWS resources", "Infrastructure", false, "@", (0xFF, 0x99, 0x00)),
        // Source Code
        tool("github", "GitHub", "Development platform for hosting and reviewing code", "Source Code", true, "G", (0x18, 0x17, 0x17)),
        tool("gitlab", "GitLab", "Complete DevOps platform with Git repository management", "Source Code", false, "g", (0xFC, 0x6D, 0x26)),
        tool("bitbucket", "Bitbucket", "Git solution for professional teams with built-in CI/CD", "Source Code", false, "b", (0x00, 0x52, 0xCC)),
        tool("azure-repos", "Azure Repos", "Git repositories with unlimited private repos", "Source Code", false, "z", (0x00, 0x78, 0xD4)),
        // Containerization
        tool("docker", "Docker", "Platform for building, sharing, and running containerized applications", "Containerization", true, "D", (0x24, 0x96, 0xED)),
        tool("podman", "Podman", "Daemonless container engine for developing and managing containers", "Containerization", false, "p", (0x89, 0x2C, 0xA0)),
        tool("containerd", "containerd", "Industry-standard container runtime with emphasis on simplicity", "Containerization", false, "c", (0x57, 0x57, 0x57)),
        tool("buildah", "Buildah", "Tool for building OCI container images without Docker daemon", "Containerization", false, "B", (0x40, 0xC1, 0xAC)),
        // CI/CD
        tool("jenkins", "Jenkins", "Open-source automation server for building and deploying", "CI/CD", true, "J", (0xD3, 0x38, 0x33)),
        tool("github-actions", "GitHub Actions", "Workflow automation for GitHub repositories", "CI/CD", false, "a", (0x20, 0x88, 0xFF)),
        tool("circleci", "CircleCI", "Continuous integration and delivery platform", "CI/CD", false, "O", (0x34, 0x34, 0x34)),
        tool("azure-devops", "Azure DevOps", "Complete DevOps toolchain from Microsoft", "CI/CD", false, "d", (0x00, 0x78, 0xD4)),
        // Orchestration
        tool("kubernetes", "Kubernetes", "Container orchestration platform for automating deployment", "Orchestration", true, "K", (0x32, 0x6C, 0xE5)),
        tool("docker-swarm", "Docker Swarm", "Native clustering functionality for Docker containers", "Orchestration", false, "s", (0x24, 0x96, 0xED)),
        tool("nomad", "Nomad", "Flexible scheduler and orchestrator for containerized workloads", "Orchestration", false, "n", (0x00, 0xCA, 0x8E)),
        tool("openshift", "OpenShift", "Enterprise Kubernetes platform by Red Hat", "Orchestration", false, "o", (0xEE, 0x00, 0x00)),
    ]
}

// ---------------------------------------------------------------------------
// Use-case templates
// ---------------------------------------------------------------------------

pub fn templates() -> Vec<Template> {
    vec![
        Template {
            id: 1,
            title: "CI/CD Pipeline for Python/Django".into(),
            category: "cicd".into(),
            difficulty: Difficulty::Intermediate,
            duration: "5-10 min".into(),
            description: "Complete continuous integration and deployment pipeline for Django applications with testing, security scanning, and AWS deployment.".into(),
            tools: vec!["GitHub".into(), "Jenkins".into(), "Docker".into(), "AWS".into()],
            featured: true,
        },
        Template {
            id: 2,
            title: "Microservices on Kubernetes with ArgoCD".into(),
            category: "kubernetes".into(),
            difficulty: Difficulty::Advanced,
            duration: "15-20 min".into(),
            description: "Deploy and manage microservices architecture on Kubernetes cluster with GitOps using ArgoCD for continuous deployment.".into(),
            tools: vec!["GitHub".into(), "Docker".into(), "ArgoCD".into(), "Kubernetes".into()],
            featured: false,
        },
        Template {
            id: 3,
            title: "Security-First Node.js Deployment".into(),
            category: "security".into(),
            difficulty: Difficulty::Intermediate,
            duration: "8-12 min".into(),
            description: "Secure deployment pipeline with vulnerability scanning, code analysis, and hardened container deployment to production.".into(),
            tools: vec!["GitHub".into(), "Snyk".into(), "Docker".into(), "AWS".into()],
            featured: false,
        },
        Template {
            id: 4,
            title: "Multi-Environment React App".into(),
            category: "frontend".into(),
            difficulty: Difficulty::Beginner,
            duration: "3-7 min".into(),
            description: "Deploy React application to multiple environments (dev, staging, prod) with environment-specific configurations and approval gates.".into(),
            tools: vec!["GitHub".into(), "Netlify".into(), "AWS".into(), "Jenkins".into()],
            featured: false,
        },
        Template {
            id: 5,
            title: "Serverless API with AWS Lambda".into(),
            category: "serverless".into(),
            difficulty: Difficulty::Intermediate,
            duration: "6-10 min".into(),
            description: "Build and deploy serverless REST API using AWS Lambda, API Gateway, and DynamoDB with automated testing and monitoring.".into(),
            tools: vec!["GitHub".into(), "AWS Lambda".into(), "API Gateway".into(), "DynamoDB".into()],
            featured: false,
        },
        Template {
            id: 6,
            title: "Infrastructure as Code with Terraform".into(),
            category: "infrastructure".into(),
            difficulty: Difficulty::Advanced,
            duration: "12-18 min".into(),
            description: "Provision and manage cloud infrastructure using Terraform with state management, modules, and multi-environment support.".into(),
            tools: vec!["GitHub".into(), "Terraform".into(), "AWS".into(), "Terraform Cloud".into()],
            featured: false,
        },
    ]
}

// ---------------------------------------------------------------------------
// Credentials
// ---------------------------------------------------------------------------

pub fn credential_vault() -> Vec<Credential> {
    let now = Utc::now();
    vec![
        Credential {
            id: "1".into(),
            name: "Docker Hub Registry".into(),
            kind: "API Token".into(),
            service: "Docker".into(),
            last_used: now - Duration::days(1),
            status: CredentialStatus::Active,
        },
        Credential {
            id: "2".into(),
            name: "Jenkins Admin".into(),
            kind: "Username/Password".into(),
            service: "Jenkins".into(),
            last_used: now - Duration::hours(1),
            status: CredentialStatus::Active,
        },
        Credential {
            id: "3".into(),
            name: "K8s Cluster Access".into(),
            kind: "Kubeconfig".into(),
            service: "Kubernetes".into(),
            last_used: now - Duration::minutes(30),
            status: CredentialStatus::Active,
        },
        Credential {
            id: "4".into(),
            name: "GitLab Deploy Key".into(),
            kind: "SSH Key".into(),
            service: "GitLab".into(),
            last_used: now - Duration::days(7),
            status: CredentialStatus::Unused,
        },
    ]
}

pub fn credential_services() -> Vec<&'static str> {
    vec!["Docker", "Jenkins", "Kubernetes", "GitLab", "GitHub", "AWS", "Azure", "Google Cloud"]
}

pub fn credential_kinds() -> Vec<&'static str> {
    vec!["API Token", "Username/Password", "SSH Key", "Kubeconfig", "Certificate"]
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

pub fn seed_notifications() -> Vec<Notification> {
    let now = Utc::now();
    vec![
        Notification {
            id: "1".into(),
            kind: NotificationKind::Success,
            title: "Docker Build Completed".into(),
            message: "Image myapp:latest built successfully".into(),
            timestamp: now - Duration::minutes(5),
            read: false,
            tool: Some("Docker".into()),
        },
        Notification {
            id: "2".into(),
            kind: NotificationKind::Error,
            title: "Jenkins Pipeline Failed".into(),
            message: "Build #127 failed at test stage".into(),
            timestamp: now - Duration::minutes(12),
            read: false,
            tool: Some("Jenkins".into()),
        },
        Notification {
            id: "3".into(),
            kind: NotificationKind::Warning,
            title: "Kubernetes Deployment Slow".into(),
            message: "Pod startup taking longer than expected".into(),
            timestamp: now - Duration::minutes(18),
            read: true,
            tool: Some("Kubernetes".into()),
        },
    ]
}

// ---------------------------------------------------------------------------
// Chat
// ---------------------------------------------------------------------------

pub fn chat_seed() -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(
            "AIaaS Chat Console initialized. I can help you create, modify, and troubleshoot \
             your DevOps workflows.",
        ),
        ChatMessage::user("Deploy my React app to production using Docker and Kubernetes"),
        ChatMessage::assistant(
            "I'll help you deploy your React app! I'll create a workflow that:\n\n\
             1. Builds a Docker image from your React app\n\
             2. Pushes it to your container registry\n\
             3. Deploys to Kubernetes with rolling updates\n\
             4. Sets up ingress and load balancing\n\n\
             Workflow #WF-2024-001 has been created and is now running.",
        )
        .with_workflow_ref("WF-2024-001"),
    ]
}

/// Canned assistant replies, cycled round-robin by the simulator.
pub fn assistant_replies() -> Vec<&'static str> {
    vec![
        "I understand you want to modify the deployment. Let me analyze the current workflow and suggest the best approach.",
        "Creating a new workflow with your specifications. I'll integrate the necessary tools and configure them automatically.",
        "I've identified an issue in your pipeline. Here's a quick fix that should resolve it.",
        "Your workflow is now optimized! I've reduced deployment time by 35% and added automated rollback capabilities.",
    ]
}

pub fn quick_prompts() -> Vec<&'static str> {
    vec![
        "Create a CI/CD pipeline for my React app",
        "Deploy Python Flask app to AWS",
        "Set up Kubernetes monitoring",
        "Build Docker container for Node.js",
    ]
}

pub fn recent_templates() -> Vec<&'static str> {
    vec![
        "React + Docker + K8s",
        "Node.js Microservices",
        "Python FastAPI Deploy",
        "Static Site + CDN",
    ]
}

// ---------------------------------------------------------------------------
// Pricing
// ---------------------------------------------------------------------------

pub fn pricing_plans() -> Vec<PricingPlan> {
    vec![
        PricingPlan {
            id: "free".into(),
            name: "Free Trial".into(),
            price: "Rs.0".into(),
            duration: "7 Days".into(),
            yearly_price: None,
            description: "A no-risk, full-featured trial designed to let users experience the core power of the platform.".into(),
            features: vec![
                "3 Projects".into(),
                "15 Prompts".into(),
                "45 Quick Fixes".into(),
                "1 User".into(),
                "All core DevOps agents".into(),
                "Community support".into(),
            ],
            featured: false,
            cta: "Start Free Trial".into(),
        },
        PricingPlan {
            id: "developer".into(),
            name: "Developer".into(),
            price: "Rs.5,000".into(),
            duration: "per month".into(),
            yearly_price: Some("Rs.50,000/year (16% off)".into()),
            description: "Perfect for freelancers, individual developers, and hobbyists automating personal projects.".into(),
            features: vec![
                "50 Prompts/month".into(),
                "150 Quick Fixes/month".into(),
                "1 User".into(),
                "5 Projects".into(),
                "All core DevOps agents".into(),
                "Self-Healing Architecture".into(),
                "Real-Time Monitoring".into(),
                "Email Support (48hr response)".into(),
            ],
            featured: false,
            cta: "Get Developer".into(),
        },
        PricingPlan {
            id: "startup".into(),
            name: "Startup".into(),
            price: "Rs.20,000".into(),
            duration: "per month".into(),
            yearly_price: Some("Rs.2,00,000/year (16% off)".into()),
            description: "Most popular plan for collaborative teams managing a growing portfolio of applications.".into(),
            features: vec![
                "250 Prompts/month".into(),
                "750 Quick Fixes/month".into(),
                "Up to 10 Users".into(),
                "Unlimited Projects".into(),
                "All core DevOps agents".into(),
                "Self-Healing Architecture".into(),
                "Real-Time Monitoring".into(),
                "Priority Support (24hr response)".into(),
                "Workflow history & audit logs".into(),
            ],
            featured: true,
            cta: "Get Startup".into(),
        },
        PricingPlan {
            id: "enterprise".into(),
            name: "Enterprise".into(),
            price: "Custom".into(),
            duration: "pricing".into(),
            yearly_price: None,
            description: "Fully tailored solution with enterprise-grade features, dedicated support, and custom integrations.".into(),
            features: vec![
                "Custom/Unlimited Prompts".into(),
                "Custom/Unlimited Quick Fixes".into(),
                "Custom/Unlimited Users".into(),
                "Unlimited Projects".into(),
                "Custom agent development".into(),
                "Private cloud deployment".into(),
                "SSO & RBAC".into(),
                "Dedicated Account Manager".into(),
                "24/7 Phone Support".into(),
                "API access".into(),
            ],
            featured: false,
            cta: "Contact Sales".into(),
        },
    ]
}

pub fn addon_packs() -> Vec<AddOnPack> {
    vec![
        AddOnPack {
            name: "Prompt Pack".into(),
            description: "25 Prompts + 75 Quick Fixes".into(),
            price: "Rs.3,000".into(),
        },
        AddOnPack {
            name: "CI/CD Run Pack".into(),
            description: "500 extra CI/CD pipeline runs".into(),
            price: "Rs.2,500".into(),
        },
    ]
}

pub fn billing_policies() -> (Vec<&'static str>, Vec<&'static str>) {
    (
        vec![
            "Monthly or annual billing cycles available",
            "Accept all major cards, UPI payments",
            "16% discount on annual subscriptions",
            "Secure payments via Razorpay/Stripe",
        ],
        vec![
            "Upgrade anytime with prorated billing",
            "Downgrades take effect next billing cycle",
            "No setup fees or hidden charges",
            "Cancel anytime with 30-day notice",
        ],
    )
}

// ---------------------------------------------------------------------------
// Support
// ---------------------------------------------------------------------------

pub fn faqs() -> Vec<FaqEntry> {
    vec![
        FaqEntry {
            question: "How do I connect a new DevOps tool?".into(),
            answer: "Navigate to the Tool Integration page, find your desired tool, and click the Connect button. You'll need to provide the tool's API endpoint and authentication credentials. Our system will automatically test the connection and integrate it into your workflow.".into(),
        },
        FaqEntry {
            question: "What happens if a workflow step fails?".into(),
            answer: "When a step fails, the AI assistant automatically analyzes the error and suggests quick fixes. You can either apply the automated fix, manually edit the step, or skip it entirely. All failed steps are logged for troubleshooting.".into(),
        },
        FaqEntry {
            question: "How secure are my credentials?".into(),
            answer: "All credentials are encrypted using AES-256 encryption and stored in a zero-knowledge architecture. We never have access to your raw credentials, and they're automatically rotated based on your security policies.".into(),
        },
        FaqEntry {
            question: "Can I customize the workflow order?".into(),
            answer: "Yes! You can drag and drop tools to reorder your workflow, or use natural language prompts to describe your preferred execution sequence. The AI will optimize the order for efficiency and dependencies.".into(),
        },
        FaqEntry {
            question: "How do I monitor workflow performance?".into(),
            answer: "The dashboard provides real-time monitoring with detailed logs, metrics, and performance analytics. You can set up alerts for failures, performance degradation, or completion notifications.".into(),
        },
    ]
}

pub fn doc_links() -> Vec<DocLink> {
    vec![
        DocLink { title: "Getting Started Guide".into(), category: "Basics".into() },
        DocLink { title: "Tool Integration Setup".into(), category: "Integration".into() },
        DocLink { title: "Workflow Automation".into(), category: "Automation".into() },
        DocLink { title: "Security Best Practices".into(), category: "Security".into() },
        DocLink { title: "API Reference".into(), category: "API".into() },
        DocLink { title: "Troubleshooting Guide".into(), category: "Support".into() },
    ]
}

pub fn system_status() -> Vec<ServiceStatus> {
    vec![
        ServiceStatus { service: "API Gateway".into(), uptime: "99.9%".into() },
        ServiceStatus { service: "Workflow Engine".into(), uptime: "99.8%".into() },
        ServiceStatus { service: "Tool Integrations".into(), uptime: "99.7%".into() },
        ServiceStatus { service: "Monitoring".into(), uptime: "100%".into() },
    ]
}

// ---------------------------------------------------------------------------
// Feedback
// ---------------------------------------------------------------------------

pub fn feedback_stats() -> Vec<StatCard> {
    vec![
        StatCard { title: "Feedback Submitted".into(), value: "1,247".into(), change: "This month".into() },
        StatCard { title: "Features Implemented".into(), value: "23".into(), change: "From user requests".into() },
        StatCard { title: "Bugs Fixed".into(), value: "87".into(), change: "Last 30 days".into() },
        StatCard { title: "Satisfaction Rate".into(), value: "4.8/5".into(), change: "Average rating".into() },
    ]
}

pub fn recent_feedback() -> Vec<FeedbackItem> {
    vec![
        FeedbackItem {
            id: 1,
            kind: FeedbackKind::FeatureRequest,
            title: "Add support for GitLab runners".into(),
            status: FeedbackStatus::InProgress,
            votes: 23,
            age: "2 days ago".into(),
        },
        FeedbackItem {
            id: 2,
            kind: FeedbackKind::BugReport,
            title: "Docker build timeout issues".into(),
            status: FeedbackStatus::Fixed,
            votes: 15,
            age: "1 week ago".into(),
        },
        FeedbackItem {
            id: 3,
            kind: FeedbackKind::FeatureRequest,
            title: "Workflow templates library".into(),
            status: FeedbackStatus::Planned,
            votes: 31,
            age: "2 weeks ago".into(),
        },
    ]
}

/// (column title, entries) triples for the roadmap preview.
pub fn roadmap() -> Vec<(&'static str, Vec<&'static str>)> {
    vec![
        (
            "In Progress",
            vec![
                "GitLab CI/CD integration",
                "Advanced workflow templates",
                "Mobile app for monitoring",
            ],
        ),
        (
            "Planned",
            vec![
                "Multi-cloud deployment",
                "AI-powered optimization",
                "Custom integrations SDK",
            ],
        ),
        (
            "Completed",
            vec![
                "Real-time log streaming",
                "Workflow error recovery",
                "Enhanced security model",
            ],
        ),
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_24_tools_in_6_categories() {
        let catalog = integration_catalog();
        assert_eq!(catalog.len(), 24);
        let categories: std::collections::BTreeSet<_> =
            catalog.iter().map(|t| t.category.as_str()).collect();
        assert_eq!(categories.len(), 6);
    }

    #[test]
    fn catalog_ids_are_unique() {
        let catalog = integration_catalog();
        let ids: std::collections::BTreeSet<_> = catalog.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn pipeline_contains_one_failed_step() {
        let steps = pipeline_steps();
        assert_eq!(steps.iter().filter(|s| s.status.is_error()).count(), 1);
        assert_eq!(steps.iter().filter(|s| s.status.is_running()).count(), 1);
    }

    #[test]
    fn chat_seed_starts_with_system_banner() {
        let seed = chat_seed();
        assert_eq!(seed.len(), 3);
        assert_eq!(seed[0].role, crate::types::ChatRole::System);
        assert_eq!(seed[2].workflow_ref.as_deref(), Some("WF-2024-001"));
    }

    #[test]
    fn exactly_one_featured_plan() {
        assert_eq!(pricing_plans().iter().filter(|p| p.featured).count(), 1);
    }
}
