//! Static page copy. Every entry carries both languages.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SuccessStory {
    pub student: &'static str,
    pub school: &'static str,
    pub admitted_to: &'static str,
    pub project_zh: &'static str,
    pub project_en: &'static str,
}

pub const SUCCESS_STORIES: &[SuccessStory] = &[
    SuccessStory {
        student: "Timmy L.",
        school: "Phillips Exeter Academy",
        admitted_to: "MIT Class of 2028",
        project_zh: "基于大语言模型的蛋白质结构预测",
        project_en: "Protein structure prediction with large language models",
    },
    SuccessStory {
        student: "Emily Z.",
        school: "北京十一学校国际部",
        admitted_to: "Stanford Class of 2028",
        project_zh: "火星探测器自主导航算法",
        project_en: "Autonomous navigation for Mars rovers",
    },
    SuccessStory {
        student: "Michael W.",
        school: "上海美国学校",
        admitted_to: "Caltech Class of 2028",
        project_zh: "低温量子材料的拓扑性质",
        project_en: "Topological properties of low-temperature quantum materials",
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub school: &'static str,
    pub result: &'static str,
    pub quote: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Timmy L.",
        school: "Phillips Exeter Academy",
        result: "MIT Class of 2028",
        quote: "第一天的时候还没写过一行代码，一周内入门了深度学习和大模型的原理",
    },
    Testimonial {
        name: "Emily Z.",
        school: "北京十一学校国际部",
        result: "Stanford Class of 2028",
        quote: "在NASA JPL实验室的经历改变了我的人生轨迹",
    },
    Testimonial {
        name: "Michael W.",
        school: "上海美国学校",
        result: "Caltech Class of 2028",
        quote: "导师的指导让我真正理解了什么是科研精神",
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AchievementCategory {
    pub key: &'static str,
    pub zh: &'static str,
    pub en: &'static str,
}

pub const ACHIEVEMENT_CATEGORIES: &[AchievementCategory] = &[
    AchievementCategory {
        key: "all",
        zh: "全部",
        en: "All",
    },
    AchievementCategory {
        key: "publications",
        zh: "论文发表",
        en: "Publications",
    },
    AchievementCategory {
        key: "competitions",
        zh: "竞赛获奖",
        en: "Competitions",
    },
    AchievementCategory {
        key: "admissions",
        zh: "名校录取",
        en: "Admissions",
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabImage {
    pub src: &'static str,
    pub alt: &'static str,
}

pub const LAB_IMAGES: &[LabImage] = &[
    LabImage {
        src: "/images/lab-robotics.jpg",
        alt: "机器人实验室 Robotics Lab",
    },
    LabImage {
        src: "/images/lab-bio.jpg",
        alt: "生物医学实验室 Biomedical Lab",
    },
    LabImage {
        src: "/images/lab-compute.jpg",
        alt: "GPU计算集群 GPU Compute Cluster",
    },
    LabImage {
        src: "/images/lab-optics.jpg",
        alt: "光学实验室 Optics Lab",
    },
];

pub type OutcomePage = &'static [(&'static str, &'static str)];

/// Admission outcomes, grouped into pages of `(university, count)` rows.
pub const OUTCOME_PAGES: &[OutcomePage] = &[
    &[("MIT", "12"), ("Stanford", "9"), ("Harvard", "7"), ("Caltech", "5")],
    &[("Princeton", "6"), ("Yale", "6"), ("Columbia", "8"), ("UPenn", "10")],
    &[("CMU", "14"), ("UC Berkeley", "18"), ("Cornell", "11"), ("Johns Hopkins", "7")],
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Program {
    pub zh: &'static str,
    pub en: &'static str,
    pub weeks: u8,
}

pub const PROGRAMS: &[Program] = &[
    Program {
        zh: "人工智能与机器学习",
        en: "AI & Machine Learning",
        weeks: 6,
    },
    Program {
        zh: "航空航天工程",
        en: "Aerospace Engineering",
        weeks: 8,
    },
    Program {
        zh: "生物医学研究",
        en: "Biomedical Research",
        weeks: 6,
    },
];
