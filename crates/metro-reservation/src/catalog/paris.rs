//! Bundled Paris metro station list, grouped by line.
//!
//! Interchange stations appear once per line; [`Catalog`](super::Catalog)
//! keeps their first position.

/// Stations in canonical display order.
pub const PARIS_METRO: &[&str] = &[
    // Line 1
    "Château de Vincennes",
    "Bérault",
    "Saint-Mandé",
    "Nation",
    "Reuilly - Diderot",
    "Gare de Lyon",
    "Châtelet",
    "Louvre - Rivoli",
    "Palais-Royal - Musée du Louvre",
    "Tuileries",
    "Concorde",
    "Champs-Élysées - Clemenceau",
    "George V",
    "Charles de Gaulle - Étoile",
    "Argentine",
    "Porte Maillot",
    "Les Sablons",
    "Pont de Neuilly",
    "Esplanade de La Défense",
    "La Défense",
    // Line 4
    "Porte de Clignancourt",
    "Simplon",
    "Marcadet - Poissonniers",
    "Château Rouge",
    "Barbès - Rochechouart",
    "Gare du Nord",
    "Gare de l'Est",
    "République",
    "Hôtel de Ville",
    "Cité",
    "Saint-Michel",
    "Odéon",
    "Saint-Germain-des-Prés",
    "Saint-Sulpice",
    "Saint-Placide",
    "Montparnasse - Bienvenüe",
    "Vavin",
    "Raspail",
    "Denfert-Rochereau",
    "Mouton-Duvernet",
    "Alésia",
    "Porte d'Orléans",
    // Line 6
    "Charles de Gaulle - Étoile",
    "Kléber",
    "Boissière",
    "Trocadéro",
    "Passy",
    "Bir-Hakeim",
    "Dupleix",
    "La Motte-Picquet - Grenelle",
    "Cambronne",
    "Sèvres - Lecourbe",
    "Pasteur",
    "Montparnasse - Bienvenüe",
    "Edgar Quinet",
    "Raspail",
    "Denfert-Rochereau",
    "Saint-Jacques",
    "Glacière",
    "Corvisart",
    "Place d'Italie",
    "Nationale",
    "Chevaleret",
    "Quai de la Gare",
    "Bercy",
    "Dugommier",
    "Daumesnil",
    "Bel-Air",
    "Picpus",
    "Nation",
    // Line 9
    "Pont de Sèvres",
    "Billancourt",
    "Marcel Sembat",
    "Exelmans",
    "Michel-Ange - Molitor",
    "Michel-Ange - Auteuil",
    "Jasmin",
    "Ranelagh",
    "La Muette",
    "Rue de la Pompe",
    "Trocadéro",
    "Iéna",
    "Alma - Marceau",
    "Franklin D. Roosevelt",
    "Chaussée d'Antin - La Fayette",
    "Richelieu - Drouot",
    "Grands Boulevards",
    "Bonne Nouvelle",
    "Strasbourg - Saint-Denis",
    "République",
    "Oberkampf",
    "Saint-Ambroise",
    "Voltaire",
    "Charonne",
    "Rue des Boulets",
    "Nation",
    "Buzenval",
    "Maraîchers",
    "Porte de Montreuil",
    "Robespierre",
    "Croix de Chavaux",
    "Mairie de Montreuil",
    // Line 14
    "Saint-Lazare",
    "Châtelet",
    "Gare de Lyon",
    "Bercy",
    "Cour Saint-Émilion",
    "Bibliothèque François Mitterrand",
    "Olympiades",
    // Landmark stations on other lines
    "Pigalle",
    "Abbesses",
    "Anvers",
    "Opéra",
    "Bastille",
    "Père Lachaise",
    "Belleville",
    "Ménilmontant",
    "Invalides",
    "École Militaire",
    "Pont Neuf",
    "Châtelet - Les Halles",
    "Réaumur - Sébastopol",
    "Arts et Métiers",
    "Temple",
    "Filles du Calvaire",
    "Saint-Paul",
    "Pont Marie",
    "Sully - Morland",
    "Mabillon",
    "Cluny - La Sorbonne",
    "Maubert - Mutualité",
    "Cardinal Lemoine",
    "Jussieu",
    "Place Monge",
    "Censier - Daubenton",
    "Les Gobelins",
    "Place d'Italie",
    "Tolbiac",
    "Maison Blanche",
    "Porte d'Italie",
];
