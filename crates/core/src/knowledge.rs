//! Canned knowledge tables for campus topics.
//!
//! Each table is an ordered list of matcher entries. Order is a contract:
//! entries are evaluated first-to-last and an earlier entry shadows any
//! later entry whose substrings also occur in the slot value. Keep more
//! specific matchers ("fine arts") ahead of broader ones when adding rows.

/// One matcher row: if any substring occurs in the lowercased slot value,
/// the row's response is returned.
#[derive(Clone, Copy, Debug)]
pub struct TableEntry {
    pub matchers: &'static [&'static str],
    pub response: &'static str,
}

/// An ordered response table for one conversation topic.
#[derive(Clone, Copy, Debug)]
pub struct ResponseTable {
    pub topic: &'static str,
    /// Returned when the slot is absent: lists everything the table knows.
    pub overview: &'static str,
    /// Returned when no matcher fires: prompts the user to pick a known topic.
    pub fallback: &'static str,
    pub entries: &'static [TableEntry],
}

pub const STUDENT_BODIES: ResponseTable = ResponseTable {
    topic: "student_body",
    overview: "Here are the main student bodies at Vignan University:\n\n\
        \u{2022} SAC (Student Activities Council)\n\
        \u{2022} Entrepreneurship Cell\n\
        \u{2022} Vignan Sports Contingent\n\
        \u{2022} Anti-Ragging Committee\n\
        \u{2022} NCC (National Cadet Corps)\n\
        \u{2022} NSS (National Service Scheme)\n\n\
        You can ask about specific ones for more details!",
    fallback: "I can tell you about SAC (Student Activities Council), Entrepreneurship Cell, \
        Vignan Sports Contingent, Anti-Ragging Committee, NCC (National Cadet Corps), and \
        NSS (National Service Scheme). Which one interests you?",
    entries: &[
        TableEntry {
            matchers: &["sac", "student activities council"],
            response: "SAC (Student Activities Council) is the umbrella body that coordinates \
                all student-led initiatives and events. It has 8 verticals: Culturals, Literary, \
                Fine Arts, Public Relations, Technical Design, Logistics, Stage Management, and \
                Photography. I can tell you about any specific vertical!",
        },
        TableEntry {
            matchers: &["entrepreneurship"],
            response: "The Entrepreneurship Cell at Vignan University fosters innovation, \
                startup culture, and business acumen among students. It offers startup \
                incubation programs, business plan competitions, industry expert sessions, \
                funding and investment guidance, and innovation challenges.",
        },
        TableEntry {
            matchers: &["sports"],
            response: "The Vignan Sports Contingent is the premier sports organization that \
                promotes athletics and physical fitness among students. It organizes \
                inter-college tournaments, training sessions for various sports, annual sports \
                meets, and represents the university in external competitions.",
        },
        TableEntry {
            matchers: &["ncc"],
            response: "NCC (National Cadet Corps) at Vignan University is a military-style \
                training program that instills discipline, patriotism, and leadership qualities \
                in students. It offers military drills and training, community service projects, \
                leadership development programs, national integration camps, and disaster relief \
                activities.",
        },
        TableEntry {
            matchers: &["nss"],
            response: "NSS (National Service Scheme) at Vignan University is a community \
                service program that encourages social responsibility and rural outreach among \
                students. It organizes rural development projects, health and hygiene awareness \
                campaigns, environmental conservation initiatives, literacy and education \
                programs, and disaster relief activities.",
        },
        TableEntry {
            matchers: &["anti-ragging"],
            response: "The Anti-Ragging Committee at Vignan University is a dedicated committee \
                that ensures student safety and maintains a welcoming, inclusive environment \
                for all students. It monitors campus for ragging incidents, conducts awareness \
                programs, provides counseling and support, and maintains strict anti-ragging \
                policies.",
        },
    ],
};

pub const SAC_VERTICALS: ResponseTable = ResponseTable {
    topic: "vertical",
    overview: "SAC has 8 main verticals:\n\n\
        1. Culturals - Dance, Music & Theatre Arts\n\
        2. Literary - Readers, Writers & Orators\n\
        3. Fine Arts - Arts, Crafts & Ambience\n\
        4. Public Relations & Digital Marketing\n\
        5. Technical Design\n\
        6. Logistics\n\
        7. Stage Management\n\
        8. Photography\n\n\
        Each vertical focuses on specific skills and activities. Students can join any \
        vertical based on their interests!",
    fallback: "SAC has 8 main verticals: Culturals, Literary, Fine Arts, Public Relations, \
        Technical Design, Logistics, Stage Management, and Photography. Which one would you \
        like to know about?",
    entries: &[
        TableEntry {
            matchers: &["culturals", "cultural"],
            response: "The Culturals vertical in SAC focuses on Dance, Music & Theatre Arts - \
                it's the creative soul of campus life! This vertical organizes dance \
                performances, music concerts, theatre productions, cultural festivals, and \
                talent showcases.",
        },
        TableEntry {
            matchers: &["literary"],
            response: "The Literary vertical in SAC focuses on Readers, Writers & Orators - \
                the intellectual and creative minds of campus. It organizes debate \
                competitions, creative writing workshops, public speaking events, literary \
                discussions and book clubs, poetry and storytelling sessions.",
        },
        // Declared ahead of the "pr" row so "fine arts" is never shadowed.
        TableEntry {
            matchers: &["fine arts"],
            response: "The Fine Arts vertical in SAC focuses on Arts, Crafts & Ambience - \
                creating visual beauty and artistic expression on campus. It organizes art \
                exhibitions, craft workshops, design competitions, and campus decoration \
                projects.",
        },
        TableEntry {
            matchers: &["public relations", "pr"],
            response: "The Public Relations & Digital Marketing vertical in SAC handles all \
                communication, branding, and digital presence. It manages social media, \
                creates promotional content, handles media relations, and develops marketing \
                strategies for events.",
        },
        TableEntry {
            matchers: &["technical"],
            response: "The Technical Design vertical in SAC focuses on creating technical \
                solutions and innovative designs. It organizes technical competitions and \
                hackathons, innovation challenges, prototype development, technical workshops \
                and training, and research and development projects.",
        },
        TableEntry {
            matchers: &["logistics"],
            response: "The Logistics vertical in SAC handles all event planning, resource \
                management, and operational coordination. It manages venue bookings, equipment \
                setup, transportation, catering, and ensures smooth execution of all campus \
                events.",
        },
        TableEntry {
            matchers: &["stage"],
            response: "The Stage Management vertical in SAC handles all technical aspects of \
                performances and events. It manages sound systems, lighting, stage setup, \
                technical rehearsals, and ensures professional quality presentations.",
        },
        TableEntry {
            matchers: &["photography"],
            response: "The Photography vertical in SAC captures and documents all campus \
                events and activities. It provides photography services, conducts workshops, \
                organizes photo competitions, and maintains a visual record of campus life.",
        },
    ],
};

pub const CAMPUS_SPOTS: ResponseTable = ResponseTable {
    topic: "campus_spot",
    overview: "Vignan University has several iconic spots including:\n\n\
        \u{2022} U Block - The central hub for student activities\n\
        \u{2022} MHP Canteen - Heart of campus social life\n\
        \u{2022} Various academic blocks and facilities\n\n\
        Would you like to know about specific locations?",
    fallback: "Vignan University has several iconic spots including U Block and MHP Canteen. \
        U Block is the central hub for student activities, while MHP Canteen is the heart of \
        campus social life. Would you like to know about specific locations?",
    entries: &[
        TableEntry {
            matchers: &["u block"],
            response: "U Block is one of the most recognizable landmarks on Vignan campus and \
                serves as a central hub for student activities and gatherings. It's a symbol \
                of student unity and campus spirit where students come together for meetings, \
                discussions, cultural events, performances, study groups, and informal \
                gatherings.",
        },
        TableEntry {
            matchers: &["mhp canteen", "canteen"],
            response: "MHP Canteen (Multi-Purpose Hall Canteen) is the heart of campus social \
                life at Vignan University. It's where students gather for daily meals, \
                refreshments, group discussions, debates, cultural exchange, networking, \
                informal meetings, and relaxation.",
        },
    ],
};
