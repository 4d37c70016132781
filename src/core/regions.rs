//! Static region→cities reference table.
//!
//! 16 German federal states, each with its enumerated pickup cities,
//! transcribed from the upstream location list. Insertion order is the
//! canonical display order. City names are kept verbatim, spelling quirks
//! included, since they are matched by exact string comparison.

/// One region and its ordered pickup cities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionEntry {
    /// Unique identifier, e.g. "Bayern".
    pub id: &'static str,
    /// Display name; equals the identifier for every real region.
    pub name: &'static str,
    pub cities: &'static [&'static str],
}

/// Display name of the empty-identifier "no selection" option shown before
/// any region is picked. Never part of rate logic.
pub const SELECT_REGION_PROMPT: &str = "Select a Region";

pub const REGIONS: &[RegionEntry] = &[
    RegionEntry {
        id: "Baden-Württemberg",
        name: "Baden-Württemberg",
        cities: &[
            "Aalen",
            "Albstadt",
            "Backnang",
            "Bad Dürrheim",
            "Baden-Baden",
            "Bruchsal",
            "Böblingen",
            "Crailsheim",
            "Eislingen",
            "Emmendingen",
            "Esslingen",
            "Fellbach",
            "Freiburg",
            "Freiburg-City",
            "Friedrichshafen",
            "Heidelberg",
            "Heidelberg-Rohrbach",
            "Heidenheim",
            "Heilbronn",
            "Karlsruhe - Ettlinger Tor",
            "Karlsruhe-Bulach",
            "Kirchheim",
            "Konstanz",
            "Lahr",
            "Leinfelden-Echterdingen",
            "Ludwigsburg",
            "Mannheim-City",
            "Mannheim-Neckarau",
            "Mannheim-Sandhofen",
            "Mosbach",
            "Müllheim",
            "Nagold",
            "Nürtingen",
            "Offenburg",
            "Pforzheim",
            "Ravensburg",
            "Reutlingen",
            "Schorndorf",
            "Schwäbisch Gmünd",
            "Schwäbisch Hall",
            "Sindelfingen",
            "Singen",
            "Sinsheim",
            "Stuttgart Feuerbach",
            "Stuttgart Milaneo",
            "Tübingen",
            "Ulm",
        ],
    },
    RegionEntry {
        id: "Bayern",
        name: "Bayern",
        cities: &[
            "Amberg",
            "Ansbach",
            "Aschaffenburg",
            "Aschaffenburg City",
            "Augsburg-Göggingen",
            "Augsburg-Oberhausen",
            "Bad Neustadt",
            "Bayreuth",
            "Burghausen",
            "Coburg",
            "Deggendorf",
            "Donauwörth",
            "Erding",
            "Erlangen",
            "Forchheim",
            "Hallstadt",
            "Hof",
            "Ingolstadt",
            "Karlsfeld",
            "Kempten",
            "Kulmbach",
            "Landsberg am Lech",
            "Landshut",
            "Marktredwitz",
            "Memmingen",
            "Mühldorf am Inn",
            "München OEZ",
            "München PEP",
            "München-Euroindustriepark",
            "München-Haidhausen",
            "München-Pasing",
            "München-Solln",
            "Neu-Ulm",
            "Neuburg an der Donau",
            "Neumarkt",
            "Nördlingen",
            "Nürnberg-City",
            "Nürnberg-Kleinreuth",
            "Nürnberg-Langwasser",
            "Nürnberg-Schoppershof",
            "Passau",
            "Regensburg",
            "Rosenheim",
            "Schwabach",
            "Schweinfurt",
            "Schweinfurt City",
            "Stadtgalerie Passau",
            "Straubing",
            "Traunreut",
            "Traunstein",
            "Unterföhring",
            "Weiden",
            "Weilheim",
            "Würzburg",
            "Würzburg-City",
            "Würzburg-Dürrbachau",
        ],
    },
    RegionEntry {
        id: "Berlin",
        name: "Berlin",
        cities: &[
            "Berlin Friedrichshain",
            "Berlin-Biesdorf",
            "Berlin-Charlottenburg",
            "Berlin-Gropiusstadt",
            "Berlin-Hohenschönhausen",
            "Berlin-Mitte",
            "Berlin-Neukölln",
            "Berlin-Prenzlauer Berg",
            "Berlin-Schöneweide",
            "Berlin-Spandau",
            "Berlin-Steglitz",
            "Berlin-Tegel",
            "Berlin-Tempelhof",
            "Berlin-Wedding",
        ],
    },
    RegionEntry {
        id: "Brandenburg",
        name: "Brandenburg",
        cities: &[
            "Berlin-Waltersdorf",
            "Brandenburg",
            "Cottbus",
            "Eiche",
            "Potsdam",
            "Potsdam-City",
            "Schwedt",
        ],
    },
    RegionEntry {
        id: "Bremen",
        name: "Bremen",
        cities: &[
            "Bremen-Waterfront",
            "Bremen-Weserpark",
            "bremen-habenhausen",
        ],
    },
    RegionEntry {
        id: "Hamburg",
        name: "Hamburg",
        cities: &[
            "Hamburg Poppenbüttel",
            "Hamburg-Altona",
            "Hamburg-Billstedt",
            "Hamburg-Harburg",
            "Hamburg-Hummelsbüttel",
            "Hamburg-Nedderfeld",
            "Hamburg-Wandsbek",
        ],
    },
    RegionEntry {
        id: "Hessen",
        name: "Hessen",
        cities: &[
            "Dietzenbach",
            "Baunatal",
            "Bischofsheim",
            "Egelsbach",
            "Frankfurt-Borsigallee",
            "Frankfurt-Nordwestzentrum",
            "Fulda",
            "Gießen",
            "Groß Gerau",
            "Gründau Lieblos",
            "Hanau",
            "Heppenheim",
            "Kassel",
            "Limburg",
            "Main Taunus Zentrum",
            "Marburg",
            "Pfungstadt",
            "Viernheim",
            "Weinheim",
            "Weiterstadt",
            "Wetzlar",
            "Wiesbaden-Hasengarten",
            "Wiesbaden-Äppelallee",
        ],
    },
    RegionEntry {
        id: "Mecklenburg-Vorpommern",
        name: "Mecklenburg-Vorpommern",
        cities: &[
            "Greifswald",
            "Neubrandenburg",
            "Rostock-Brinckmansdorf",
            "Rostock-City",
            "Rostock-Sievershagen",
            "Schwerin",
            "Stralsund",
        ],
    },
    RegionEntry {
        id: "Niedersachsen",
        name: "Niedersachsen",
        cities: &[
            "Belm-Osnabrück",
            "Braunschweig",
            "Bremerhaven-Schiffdorf-Spaden",
            "Buchholz in der Nordheide",
            "Buxtehude",
            "Celle",
            "Dein MediaMarkt Wolfsburg-City",
            "Delmenhorst",
            "Emden",
            "Gifhorn",
            "Goslar",
            "Göttingen",
            "Hameln",
            "Hannover Ernst-August-Platz",
            "Hannover-Vahrenheide",
            "Hannover-Wülfel",
            "Hildesheim",
            "Holzminden",
            "Isernhagen",
            "Leer",
            "Lingen",
            "Lüneburg",
            "Nienburg",
            "Nordhorn",
            "Oldenburg",
            "Osnabrück-City",
            "Papenburg",
            "Peine",
            "Salzgitter",
            "Stade",
            "Stadthagen",
            "Stuhr",
            "Wilhelmshaven",
            "Wolfsburg",
        ],
    },
    RegionEntry {
        id: "Nordrhein-Westfalen",
        name: "Nordrhein-Westfalen",
        cities: &[
            "Aachen",
            "Bergisch Gladbach",
            "Bielefeld",
            "Bocholt",
            "Bochum-Hofstede",
            "Bochum-Ruhrpark",
            "Bonn",
            "Bornheim",
            "Castrop-Rauxel",
            "Dein MediaMarkt Dortmund-Eving",
            "Dorsten",
            "Dortmund-Hörde",
            "Dortmund-Oespel",
            "Duisburg-Großenbaum",
            "Duisburg-Marxloh",
            "Düren",
            "Düsseldorf-Bilk",
            "Düsseldorf-Metrostraße",
            "Eschweiler",
            "Essen",
            "Gütersloh",
            "Hagen",
            "Herzogenrath",
            "Hückelhoven",
            "Hürth",
            "Kerpen",
            "Krefeld",
            "Köln-City am Dom",
            "Köln-Kalk",
            "Köln-Marsdorf",
            "Lippstadt",
            "Lüdenscheid",
            "Marl",
            "Mönchengladbach",
            "Mülheim",
            "Münster",
            "Neuss",
            "Paderborn",
            "Porta Westfalica (Minden)",
            "Recklinghausen",
            "Rheine",
            "Siegen",
            "Velbert",
            "Wuppertal",
            "Wuppertal - City",
        ],
    },
    RegionEntry {
        id: "Rheinland-Pfalz",
        name: "Rheinland-Pfalz",
        cities: &[
            "Alzey",
            "Bad Kreuznach",
            "Idar-Oberstein",
            "Kaiserslautern",
            "Koblenz",
            "Landau",
            "Ludwigshafen-Oggersheim (im Einkaufspark Oggersheim)",
            "Mainz",
            "Mainz-City",
            "Neustadt an der Weinstraße",
            "Neuwied",
            "Pirmasens",
            "Speyer",
            "Trier",
            "Worms",
        ],
    },
    RegionEntry {
        id: "Saarland",
        name: "Saarland",
        cities: &[
            "Homburg",
            "Neunkirchen",
            "Saarbrücken auf den Saarterrassen",
            "Saarbrücken-Saarbasar",
            "Saarlouis",
        ],
    },
    RegionEntry {
        id: "Sachsen",
        name: "Sachsen",
        cities: &[
            "Leipzig Höfe am Brühl",
            "Chemnitz-Röhrsdorf",
            "Chemnitz-Sachsenallee (im EKZ Sachsenallee)",
            "Dresden Centrum",
            "Dresden-Mickten",
            "Dresden-Prohlis",
            "Leipzig-Paunsdorf (im Paunsdorf-Center)",
            "Meerane",
            "Plauen",
            "Riesa",
            "Zwickau",
            "Zwickau am Glueck auf Center",
        ],
    },
    RegionEntry {
        id: "Sachsen-Anhalt",
        name: "Sachsen-Anhalt",
        cities: &[
            "Dessau",
            "Dessau-City",
            "Günthersdorf",
            "Halberstadt",
            "Halle",
            "Madgeburg-Bördepark",
            "Magdeburg-City",
            "Magdeburg-Pfahlberg",
        ],
    },
    RegionEntry {
        id: "Schleswig-Holstein",
        name: "Schleswig-Holstein",
        cities: &[
            "Elmshorn",
            "Flensburg",
            "Halstenbek",
            "Hamburg-Oststeinbek",
            "Heide",
            "Henstedt-Ulzburg",
            "Itzehoe",
            "Kiel",
            "Kiel-Schwentinental",
            "Kiel-Sophienhof",
            "Lübeck",
            "Lübeck-Dänischburg",
            "Neumünster",
            "Rendsburg",
        ],
    },
    RegionEntry {
        id: "Thüringen",
        name: "Thüringen",
        cities: &[
            "Erfurt Thüringen Park",
            "Eisenach",
            "Erfurt T.E.C.",
            "Jena",
            "Jena City",
            "Nordhausen",
            "Zella-Mehlis",
        ],
    },
];
