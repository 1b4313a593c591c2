//! Fixed demonstration datasets for the seed endpoints.

use crate::models::{Batmobile, Gadget};

fn batmobile(
    name: &str,
    year: i64,
    media: &str,
    title: &str,
    universe: &str,
    era: &str,
    description: &str,
) -> Batmobile {
    Batmobile {
        year: Some(year),
        title: Some(title.to_string()),
        universe: Some(universe.to_string()),
        era: Some(era.to_string()),
        description: Some(description.to_string()),
        ..Batmobile::new(name, media)
    }
}

/// Notable Batmobiles across film serials, films, TV, animation and games.
pub fn batmobiles() -> Vec<Batmobile> {
    vec![
        batmobile(
            "Serial Roadster",
            1943,
            "Film Serial",
            "Batman (1943)",
            "Film",
            "Golden Age",
            "Black 1939 Cadillac Series 61 used in the original serial.",
        ),
        batmobile(
            "Serial Sedan",
            1949,
            "Film Serial",
            "Batman and Robin (1949)",
            "Film",
            "Golden Age",
            "Stock 1949 Mercury Convertible standing in as the Batmobile.",
        ),
        Batmobile {
            designer: Some("George Barris".to_string()),
            ..batmobile(
                "1966 TV Batmobile",
                1966,
                "TV",
                "Batman (1966 TV)",
                "TV",
                "Silver Age",
                "Iconic Lincoln Futura-based Batmobile with red pinstripes and gadgets.",
            )
        },
        batmobile(
            "Burton Batmobile",
            1989,
            "Film",
            "Batman (1989)",
            "Film",
            "Burtonverse",
            "Art-deco jet-turbine Batmobile with grappling hook and armor cocoon.",
        ),
        batmobile(
            "Returns Batmobile",
            1992,
            "Film",
            "Batman Returns (1992)",
            "Film",
            "Burtonverse",
            "Updated 1989 design with shields and Batmissile escape mode.",
        ),
        batmobile(
            "Forever Batmobile",
            1995,
            "Film",
            "Batman Forever (1995)",
            "Film",
            "Schumacher",
            "Ribbed fins, exposed blue lighting, single rear fin.",
        ),
        batmobile(
            "Batman & Robin Batmobile",
            1997,
            "Film",
            "Batman & Robin (1997)",
            "Film",
            "Schumacher",
            "Open-cockpit neon-lit Batmobile with elongated nose.",
        ),
        batmobile(
            "Tumbler (Begins)",
            2005,
            "Film",
            "Batman Begins (2005)",
            "Film",
            "Nolan",
            "Military prototype bridging tank and supercar; jump capability.",
        ),
        batmobile(
            "Tumbler (TDK)",
            2008,
            "Film",
            "The Dark Knight (2008)",
            "Film",
            "Nolan",
            "Up-armored Tumbler; spawns the Batpod on self-destruct.",
        ),
        batmobile(
            "Tumbler (TDKR)",
            2012,
            "Film",
            "The Dark Knight Rises (2012)",
            "Film",
            "Nolan",
            "Multiple Tumblers in camo; commandeered by Bane's men.",
        ),
        batmobile(
            "Snyder Batmobile",
            2016,
            "Film",
            "Batman v Superman (2016)",
            "Film",
            "DCEU",
            "Hybrid of racer and armored assault vehicle.",
        ),
        batmobile(
            "Justice League Batmobile",
            2017,
            "Film",
            "Justice League (2017)",
            "Film",
            "DCEU",
            "Upgraded with heavy weaponry and shields.",
        ),
        batmobile(
            "The Batman Muscle Car",
            2022,
            "Film",
            "The Batman (2022)",
            "Film",
            "Reeves",
            "Brutalist, DIY muscle-car Batmobile with exposed V8 and roll cage.",
        ),
        batmobile(
            "BTAS Batmobile",
            1992,
            "Animation",
            "Batman: The Animated Series",
            "Animated",
            "DCAU",
            "Long-nosed art-deco Batmobile from the animated series.",
        ),
        batmobile(
            "TNBA Batmobile",
            1997,
            "Animation",
            "The New Batman Adventures",
            "Animated",
            "DCAU",
            "Streamlined update to the BTAS design.",
        ),
        batmobile(
            "Batman Beyond",
            1999,
            "Animation",
            "Batman Beyond",
            "Animated",
            "DCAU",
            "Futuristic flying Batmobile used by Terry McGinnis.",
        ),
        batmobile(
            "The Batman (2004) Batmobile",
            2004,
            "Animation",
            "The Batman (2004)",
            "Animated",
            "Animated",
            "Sleek blue-lit coupe evolving into a more aggressive design.",
        ),
        batmobile(
            "Beware the Batman",
            2013,
            "Animation",
            "Beware the Batman",
            "Animated",
            "Animated",
            "CG stylized stealth car with angular design.",
        ),
        batmobile(
            "Arkham Knight Batmobile",
            2015,
            "Game",
            "Batman: Arkham Knight",
            "Game",
            "Arkham",
            "Transforming pursuit/tank mode Batmobile central to gameplay.",
        ),
        batmobile(
            "Arkham Asylum Batmobile",
            2009,
            "Game",
            "Batman: Arkham Asylum",
            "Game",
            "Arkham",
            "Aggressive supercar aesthetic seen in cutscenes.",
        ),
        batmobile(
            "Arkham City Batmobile",
            2011,
            "Game",
            "Batman: Arkham City",
            "Game",
            "Arkham",
            "Refined version glimpsed in promotional materials.",
        ),
        batmobile(
            "The Telltale Batmobile",
            2016,
            "Game",
            "Batman: The Telltale Series",
            "Game",
            "Game",
            "Morphing car with stealth tech, seen in cinematics.",
        ),
        batmobile(
            "LEGO Batman Batmobile",
            2008,
            "Game",
            "LEGO Batman series",
            "Game",
            "LEGO",
            "Blocky stylized Batmobile from LEGO games.",
        ),
        batmobile(
            "Gotham Knight Batcycle (not a Batmobile)",
            2022,
            "Game",
            "Gotham Knights",
            "Game",
            "Game",
            "Primary ride is a Batcycle; included for reference.",
        ),
        batmobile(
            "Justice League Animated",
            2001,
            "Animation",
            "Justice League / Unlimited",
            "Animated",
            "DCAU",
            "Occasional appearances of team-era Batmobile.",
        ),
        batmobile(
            "Batman: Brave and the Bold",
            2008,
            "Animation",
            "Batman: The Brave and the Bold",
            "Animated",
            "Animated",
            "Retro-inspired convertible variants across episodes.",
        ),
        batmobile(
            "Gotham TV Proto",
            2014,
            "TV",
            "Gotham",
            "TV",
            "Prequel",
            "Pre-Batman era vehicles hinting at future design.",
        ),
    ]
}

/// Utility-belt and suit gadgets.
pub fn gadgets() -> Vec<Gadget> {
    vec![
        Gadget::new(
            "Batarang",
            "Offensive",
            "Razor-edged bat-shaped throwing weapon; multiple variants including remote and explosive.",
        ),
        Gadget::new(
            "Grapnel Gun",
            "Mobility",
            "Compressed CO2 grappling launcher for rapid ascents and swings.",
        ),
        Gadget::new(
            "Smoke Pellets",
            "Stealth",
            "Magnesium-tetrachloride pellets to create instant smoke cover.",
        ),
        Gadget::new(
            "Explosive Gel",
            "Demolition",
            "Foaming explosive compound forming bat-symbol charge; popularized in Arkham games.",
        ),
        Gadget::new(
            "Cryptographic Sequencer",
            "Forensics",
            "Handheld device for hacking and frequency scanning.",
        ),
        Gadget::new(
            "Batclaw",
            "Utility",
            "Retractable claw for pulling objects and enemies.",
        ),
        Gadget::new(
            "Line Launcher",
            "Mobility",
            "Fires a taut line between two points for horizontal traversal.",
        ),
        Gadget::new(
            "EMP Device",
            "Utility",
            "Electromagnetic pulse tool to disable electronics temporarily.",
        ),
        Gadget::new(
            "Glue Grenade",
            "Utility",
            "Deploys expanding polymer to immobilize targets (Arkham Origin).",
        ),
        Gadget::new(
            "Thermal Vision Cowl",
            "Forensics",
            "Enhanced detective vision overlay for crime scene analysis.",
        ),
        Gadget::new(
            "Shock Gloves",
            "Offensive",
            "Capacitive gauntlets delivering stunning charges.",
        ),
        Gadget::new(
            "Rebreather",
            "Survival",
            "Compact oxygen supply for underwater operations.",
        ),
        Gadget::new(
            "Sticky Bomb Gun",
            "Offensive",
            "Launches adhesive explosive charges (The Dark Knight).",
        ),
        Gadget::new(
            "Bat-sonar",
            "Surveillance",
            "Wide-area cell phone sonar mapping system (The Dark Knight).",
        ),
    ]
}
