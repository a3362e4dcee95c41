pub const TECH_TAGS: &[&str] = &[
    "NEURAL NETWORKS",
    "DEEP LEARNING",
    "TRANSFORMERS",
    "REINFORCEMENT",
    "MULTIMODAL",
    "AGENTIC SYSTEMS",
    "COMPUTER VISION",
    "KNOWLEDGE GRAPHS",
];

pub const AI_PHRASES: &[&str] = &[
    "01",
    "10",
    "AGI",
    "LLM",
    "RLHF",
    "token",
    "tensor",
    "softmax",
    "attention",
    "gradient",
    "backprop",
    "emergence",
    "神经元",
    "梯度下降",
    "注意力",
    "涌现",
];
