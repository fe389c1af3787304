//! Preparedness Guide
//!
//! Static safety guidance per hazard class: what to do now, how to prepare,
//! and what to keep in an emergency kit. `HazardClass::None` carries the
//! general-preparedness guide.

use serde::Serialize;

use crate::logic::hazard::HazardClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HazardGuide {
    pub hazard: HazardClass,
    pub title: &'static str,
    pub description: &'static str,
    /// Accent colour, `#RRGGBB`
    pub color: &'static str,
    pub immediate_actions: &'static [&'static str],
    pub preparation: &'static [&'static str],
    pub emergency_kit: &'static [&'static str],
}

/// Guide for a hazard class
pub fn guide(hazard: HazardClass) -> &'static HazardGuide {
    match hazard {
        HazardClass::None => &NONE_GUIDE,
        HazardClass::Earthquake => &EARTHQUAKE_GUIDE,
        HazardClass::Flood => &FLOOD_GUIDE,
        HazardClass::Wildfire => &WILDFIRE_GUIDE,
        HazardClass::Tsunami => &TSUNAMI_GUIDE,
        HazardClass::Volcano => &VOLCANO_GUIDE,
    }
}

/// Every guide, general preparedness first
pub fn all_guides() -> impl Iterator<Item = &'static HazardGuide> {
    HazardClass::ALL.into_iter().map(guide)
}

// ============================================================================
// GUIDE TABLE
// ============================================================================

static NONE_GUIDE: HazardGuide = HazardGuide {
    hazard: HazardClass::None,
    title: "General Emergency Preparedness",
    description: "Being prepared for any emergency ensures your safety and the safety of your loved ones.",
    color: "#95A5A6",
    immediate_actions: &[
        "Stay informed about local weather and emergency conditions",
        "Monitor official sources for updates and instructions",
        "Keep emergency contacts readily available",
        "Review your family emergency plan regularly",
        "Check emergency supplies and rotate as needed",
        "Stay calm and help others maintain composure",
    ],
    preparation: &[
        "Create a family emergency plan with meeting locations",
        "Build emergency kits for home, car, and work",
        "Learn basic first aid and CPR techniques",
        "Know your community's warning systems and evacuation routes",
        "Practice emergency drills with family members",
        "Stay informed about local hazards and risks",
    ],
    emergency_kit: &[
        "Water (1 gallon per person per day for 3+ days)",
        "Non-perishable food (3+ day supply)",
        "Manual can opener",
        "First aid kit and medications",
        "Flashlight with extra batteries",
        "Battery-powered or hand-crank radio",
        "Multi-purpose tool",
        "Sanitation and personal hygiene items",
        "Copies of personal documents",
        "Cell phone with chargers and backup battery",
    ],
};

static EARTHQUAKE_GUIDE: HazardGuide = HazardGuide {
    hazard: HazardClass::Earthquake,
    title: "Earthquake Safety Guide",
    description: "Earthquakes can strike suddenly without warning. Proper preparation and immediate action can save lives.",
    color: "#FF6B6B",
    immediate_actions: &[
        "DROP to your hands and knees",
        "COVER your head and neck under sturdy furniture",
        "HOLD ON until shaking stops",
        "Stay away from windows, glass, and exterior walls",
        "If outdoors, move to an open area away from buildings, trees, and power lines",
        "If in a vehicle, pull over and set parking brake",
    ],
    preparation: &[
        "Secure your space: Anchor heavy furniture, appliances, and water heaters to walls",
        "Create emergency kits: Prepare grab-and-go bags for each family member",
        "Practice drills: Conduct regular earthquake drills with family/colleagues",
        "Know safe spots: Identify safe places in each room (under tables, against interior walls)",
        "Learn first aid: Take basic first aid and CPR training",
        "Document preparation: Take photos of your property for insurance purposes",
    ],
    emergency_kit: &[
        "Water (1 gallon per person per day for 3+ days)",
        "Non-perishable food (3+ day supply)",
        "Manual can opener",
        "First aid kit and medications",
        "Flashlight with extra batteries",
        "Battery-powered radio",
        "Multi-tool or wrench for turning off utilities",
        "Whistle to signal for help",
        "Dust masks and goggles",
        "Moist towelettes and garbage bags",
    ],
};

static FLOOD_GUIDE: HazardGuide = HazardGuide {
    hazard: HazardClass::Flood,
    title: "Flood Safety Guide",
    description: "Floods are among the most common and destructive natural disasters. Never underestimate the power of water.",
    color: "#4ECDC4",
    immediate_actions: &[
        "Move to higher ground immediately",
        "Avoid walking or driving through flood waters - 6 inches can sweep you away",
        "Turn off electricity at the main breaker if safe to do so",
        "Evacuate immediately if instructed by authorities",
        "Stay away from bridges over fast-moving water",
        "Keep children and pets away from floodwaters",
    ],
    preparation: &[
        "Know your risk: Check FEMA flood maps for your area",
        "Elevate critical utilities: Electrical panels, water heaters, and HVAC equipment",
        "Install check valves in plumbing to prevent backups",
        "Waterproof basement: Apply coatings and install sump pumps",
        "Create barriers: Keep sandbags and flood barriers available",
        "Document valuables: Keep important documents in waterproof containers",
    ],
    emergency_kit: &[
        "Life jackets for each family member",
        "Waterproof containers for documents",
        "Battery-powered weather radio",
        "Water purification tablets",
        "Rubber boots and gloves",
        "Emergency contact list",
        "Cash (ATMs may not work)",
        "Charged power banks for phones",
        "Insurance documents and photos of property",
    ],
};

static WILDFIRE_GUIDE: HazardGuide = HazardGuide {
    hazard: HazardClass::Wildfire,
    title: "Wildfire Safety Guide",
    description: "Wildfires spread rapidly and can create their own weather patterns. Early evacuation is crucial.",
    color: "#FF9F43",
    immediate_actions: &[
        "Evacuate immediately if ordered - don't wait",
        "Close all windows and doors to prevent draft",
        "Remove flammable items from around your house",
        "Wet your roof and shrubs if time permits",
        "Turn off gas at the meter if instructed",
        "Wear protective clothing (cotton/wool, no synthetics)",
    ],
    preparation: &[
        "Create defensible space: Clear 30+ feet around structures",
        "Use fire-resistant materials for roofing and siding",
        "Clean gutters regularly of leaves and debris",
        "Plan multiple evacuation routes and practice them",
        "Prepare pets and livestock for quick evacuation",
        "Keep vehicles fueled and facing escape direction",
    ],
    emergency_kit: &[
        "N95 masks or respirators for smoke protection",
        "Goggles for eye protection",
        "Wool or cotton clothing (no synthetics)",
        "Leather gloves",
        "Emergency water and non-perishable food",
        "Important documents in fireproof container",
        "Pet supplies and carriers",
        "Prescription medications for 2+ weeks",
    ],
};

static TSUNAMI_GUIDE: HazardGuide = HazardGuide {
    hazard: HazardClass::Tsunami,
    title: "Tsunami Safety Guide",
    description: "Tsunamis are series of powerful waves caused by underwater disturbances. Move to high ground immediately.",
    color: "#45B7D1",
    immediate_actions: &[
        "Move to high ground immediately - don't wait for official warnings",
        "Stay away from beaches and waterways",
        "Follow designated evacuation routes",
        "Go as far inland as possible",
        "Climb to upper floors of sturdy buildings if trapped",
        "Never go to the coast to watch a tsunami",
    ],
    preparation: &[
        "Know your zone: Learn tsunami evacuation routes and safe areas",
        "Practice evacuation drills with your family",
        "Keep emergency supplies on upper floors",
        "Learn natural warning signs: strong earthquake, ocean roar, water recession",
        "Have multiple communication methods: battery radio, cell alerts, neighbor plans",
        "Identify vertical evacuation buildings in your area",
    ],
    emergency_kit: &[
        "Life jackets for each family member",
        "Waterproof document container",
        "Battery-powered NOAA weather radio",
        "Water and food for 3+ days",
        "Warm clothing and blankets",
        "First aid kit and medications",
        "Whistle and signal mirror",
        "Cash in small denominations",
    ],
};

static VOLCANO_GUIDE: HazardGuide = HazardGuide {
    hazard: HazardClass::Volcano,
    title: "Volcano Safety Guide",
    description: "Volcanic eruptions can send ash clouds miles into the air and create deadly mudflows. Follow evacuation orders immediately.",
    color: "#A358D6",
    immediate_actions: &[
        "Evacuate immediately if ordered",
        "Avoid river valleys and low-lying areas (lahar risk)",
        "Protect yourself from ash fall with mask and goggles",
        "Stay indoors and close all windows, doors, and dampers",
        "Protect electronics and machinery from ash damage",
        "Listen to official updates for eruption information",
    ],
    preparation: &[
        "Learn about volcanic risks in your region",
        "Prepare emergency masks (N95) and goggles for ash protection",
        "Have supplies for several days of sheltering indoors",
        "Plan evacuation routes that avoid river valleys",
        "Protect water sources from ash contamination",
        "Keep vehicle air filters and maintain full gas tank",
    ],
    emergency_kit: &[
        "N95 masks for each family member",
        "Safety goggles or glasses",
        "Long-sleeved shirts and long pants",
        "Duct tape and plastic for sealing windows",
        "Extra air filters for vehicles",
        "Battery-powered radio",
        "Ash cleanup supplies (shovels, buckets)",
        "Eye wash solution",
    ],
};
